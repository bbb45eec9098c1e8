use std::sync::Arc;

use shopkit_core::application::ShopkitService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ShopkitService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ShopkitService) -> Self {
        Self { args, service }
    }
}
