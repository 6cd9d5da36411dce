/// Factory: build the process-wide token maker from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::token::{LocalTokenMaker, Maker, TokenError};

pub fn build_token_maker(config: &Config) -> Result<Arc<dyn Maker>, TokenError> {
    let maker = LocalTokenMaker::new(config.token_symmetric_key.as_bytes())?;
    Ok(Arc::new(maker))
}
