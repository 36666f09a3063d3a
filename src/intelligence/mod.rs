pub mod classifier;
pub mod decision;
pub mod engine;
pub mod scorer;

pub use classifier::{ClassifierUnavailable, Features, LogisticModel, TrainedClassifier};
pub use decision::{Decision, Label, Source};
pub use engine::{classify, DecisionEngine, DecisionError, Evaluation};
pub use scorer::{heuristic_decision, HeuristicScore};
