pub mod random_defense;
