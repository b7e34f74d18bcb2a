//! An exact and Monte Carlo odds engine for weighted draft lotteries. Given a vector of
//! lottery weights and the number of draft positions decided by the lottery, derives the
//! probability of every participant landing in every draft position: exhaustively where
//! tractable, by simulation where not. Also runs single lottery draws.

pub mod comb;
pub mod data;
pub mod dispatch;
pub mod draw;
pub mod exact;
pub mod feasibility;
pub mod linear;
pub mod mc;
pub mod odds;
pub mod print;
pub mod probs;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
