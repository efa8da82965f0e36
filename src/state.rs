use std::sync::Arc;
use crate::domain::ports::{ProductRepository, ProductVariantRepository, UserRepository};
use crate::domain::services::token_service::TokenService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub product_repo: Arc<dyn ProductRepository>,
    pub variant_repo: Arc<dyn ProductVariantRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub token_service: Arc<TokenService>,
}
