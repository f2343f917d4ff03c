pub mod equation;
pub mod expression;
pub mod operator;
pub mod selection;
