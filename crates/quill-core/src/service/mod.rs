//! Services orchestrating the business rules on top of the repository traits.

pub mod post;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;
