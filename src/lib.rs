pub mod analyzers;
pub mod clean;
pub mod error;
pub mod features;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod vocab;
