pub mod citas;
pub mod clientes;
pub mod empleados;
pub mod health;
pub mod roles;
pub mod usuarios;

pub use citas::{create_cita, list_citas};
pub use clientes::{list_clientes, register_cliente};
pub use empleados::list_empleados;
pub use health::{health_check, readiness_check};
pub use roles::list_roles;
pub use usuarios::list_usuarios;
