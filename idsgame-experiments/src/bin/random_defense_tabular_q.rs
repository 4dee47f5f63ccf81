use clap::Parser;
use idsgame_experiments::{training::v3::random_defense::tabular_q_learning, util::Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let artifacts = tabular_q_learning::run(&args)?;
    match (&artifacts.train_csv, &artifacts.eval_csv) {
        (Some(train), Some(eval)) => {
            println!("train results: {}", train.display());
            println!("eval results: {}", eval.display());
        }
        _ => println!("run {} recorded no results", artifacts.time_str),
    }
    Ok(())
}
