pub mod prediction;
pub mod student;

pub use prediction::{
    fun_message, InputError, NumericInput, PredictRequest, PredictResponse, Scores, CGPA_RANGE,
    IQ_RANGE,
};
pub use student::{SampleStudent, SAMPLE_STUDENTS};
