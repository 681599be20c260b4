use crate::application::{ports::uploads::FileStore, services::ApplicationServices};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub uploads: Arc<dyn FileStore>,
}
