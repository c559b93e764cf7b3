use crate::error::Result;

pub trait MetricCalculator {
    type Input;
    type Output;

    fn calculate(&self, input: Self::Input) -> Result<Self::Output>;
}
