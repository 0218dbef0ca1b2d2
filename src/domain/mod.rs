// Domain layer - Core entities and pure transformations
pub mod digest;
pub mod observation;
pub mod series;
