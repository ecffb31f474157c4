pub mod store;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod favorite {
    pub mod repository;
}
pub mod session {
    pub mod repository;
}
