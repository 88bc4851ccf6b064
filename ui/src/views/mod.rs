mod home;
pub use home::Home;

mod experiment;
pub use experiment::Experiment;
