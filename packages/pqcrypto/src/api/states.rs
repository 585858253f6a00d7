//! State types for builder patterns

/// Marker trait for builder states
pub trait BuilderState: Send + Sync + 'static {}

/// State indicating that an algorithm is needed
#[derive(Debug, Clone, Copy)]
pub struct NeedAlgorithm;
impl BuilderState for NeedAlgorithm {}

/// State indicating that an algorithm has been chosen
#[derive(Debug, Clone, Copy)]
pub struct HasAlgorithm;
impl BuilderState for HasAlgorithm {}
