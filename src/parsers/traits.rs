use crate::errors::SalesResult;

pub trait Parser {
    type Output;

    fn parse(&self, content: &str) -> SalesResult<Vec<Self::Output>>;

    fn is_supported(filename: &str) -> bool;
}
