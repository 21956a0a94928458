mod encoder;
mod feature;
mod record;
mod schema;

pub use encoder::{
    EncodedVector, Encoder, UnknownCategoryPolicy, capture_schema, encode_request,
    encode_training_matrix,
};
pub use feature::{ContinuousFeature, FeatureSet, NumericDomain};
pub use record::{FeatureValue, RawRecord};
pub use schema::{Column, FeatureSchema};
