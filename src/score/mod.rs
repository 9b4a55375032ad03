pub mod aggregate;
pub mod badge;
pub mod estimate;
pub mod normalize;
pub mod rank;
