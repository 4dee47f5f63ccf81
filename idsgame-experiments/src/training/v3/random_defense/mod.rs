pub mod tabular_q_learning;
