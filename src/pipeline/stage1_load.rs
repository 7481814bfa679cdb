use std::path::PathBuf;

use crate::input::{InputError, InputPair, load_input_pair};

#[derive(Debug, Clone)]
pub struct Stage1Params {
    pub base_path: PathBuf,
    pub approx_path: PathBuf,
    pub column: String,
}

pub fn run_stage1(params: &Stage1Params) -> Result<InputPair, InputError> {
    load_input_pair(&params.base_path, &params.approx_path, &params.column)
}
