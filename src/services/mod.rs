pub(crate) mod game_service;
pub(crate) mod registry;
