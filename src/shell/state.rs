use crate::modules::reports::application::queries_port::AppointmentQueries;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub appointments: Arc<dyn AppointmentQueries>,
}

impl AppState {
    pub fn new(appointments: Arc<dyn AppointmentQueries>) -> Self {
        Self { appointments }
    }
}
