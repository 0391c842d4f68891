pub mod aggregator;
pub mod batch;
pub mod combination;
pub mod engine;
pub mod id_card;
pub mod mapper;
pub mod normalizer;
pub mod purpose;
pub mod quality;
pub mod root_number;
pub mod segmenter;
pub mod special_digits;
pub mod warnings;

pub use crate::domain::ports::{NeutralFactors, ResponseFactorProvider};
pub use crate::utils::error::Result;
pub use engine::AnalysisEngine;
