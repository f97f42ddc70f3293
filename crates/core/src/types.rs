/// Product primary keys are caller-supplied `BIGINT`s.
pub type ProductId = i64;
