use std::sync::Arc;

use chefai_core::application::ChefaiService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ChefaiService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ChefaiService) -> Self {
        Self { args, service }
    }
}
