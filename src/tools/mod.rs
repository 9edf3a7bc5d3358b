pub mod candidates;
pub mod leaderboard;
pub mod network_profile;
pub mod normalize;
pub mod people;
pub mod referral;

pub use candidates::*;
pub use leaderboard::*;
pub use network_profile::*;
pub use normalize::*;
pub use people::*;
pub use referral::*;
