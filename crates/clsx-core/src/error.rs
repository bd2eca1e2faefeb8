use thiserror::Error as ThisError;

///
/// PredictionError
///
/// Raised only by the conformance helpers on `Prediction`; neither the
/// composer nor the merge engine ever fails.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PredictionError {
    #[error("class string {actual:?} does not conform to predicted type {predicted}")]
    Mismatch { predicted: String, actual: String },

    #[error("no literal class string can be predicted; the prediction is {predicted}")]
    NotLiteral { predicted: String },
}
