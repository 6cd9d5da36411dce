/*!
 * Access token core
 *
 * Responsibility:
 * - Payload: claims sealed into a token
 * - Maker: issue / verify contract used by login handlers and the access middleware
 * - LocalTokenMaker: PASETO v4.local implementation (rusty_paseto)
 */

mod factory;
mod local_maker;
mod maker;
mod payload;

pub use factory::build_token_maker;
pub use local_maker::{KEY_LEN, LocalTokenMaker};
pub use maker::{Maker, TokenError};
pub use payload::Payload;
