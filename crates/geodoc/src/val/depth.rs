use crate::cnf::MAX_NESTING_DEPTH;
use crate::err::Error;

/// The nesting budget of a traversal.
///
/// Every step into a collection, feature, or feature collection spends one unit. A traversal
/// that runs out of budget fails with [`Error::NestingDepthExceeded`] instead of growing the
/// call stack further.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Depth {
	limit: u32,
	remaining: u32,
}

impl Depth {
	pub fn new(limit: u32) -> Self {
		Self {
			limit,
			remaining: limit,
		}
	}

	pub fn limit(&self) -> u32 {
		self.limit
	}

	pub fn remaining(&self) -> u32 {
		self.remaining
	}

	/// Spends one unit of the budget for a step into a nested document.
	pub(crate) fn dive(self) -> Result<Self, Error> {
		if self.remaining == 0 {
			return Err(Error::NestingDepthExceeded {
				limit: self.limit,
			});
		}
		Ok(Self {
			remaining: self.remaining - 1,
			..self
		})
	}
}

impl Default for Depth {
	fn default() -> Self {
		Self::new(*MAX_NESTING_DEPTH)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dive_spends_budget() {
		let depth = Depth::new(2);
		let depth = depth.dive().unwrap();
		assert_eq!(depth.remaining(), 1);
		let depth = depth.dive().unwrap();
		assert_eq!(depth.remaining(), 0);
		assert!(matches!(
			depth.dive(),
			Err(Error::NestingDepthExceeded {
				limit: 2
			})
		));
	}

	#[test]
	fn default_uses_configured_limit() {
		assert_eq!(Depth::default().limit(), *MAX_NESTING_DEPTH);
	}
}
