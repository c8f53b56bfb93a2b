pub mod cita;
pub mod cliente;
pub mod empleado;
pub mod rol;
pub mod usuario;

pub use cita::{Cita, NewCitaRequest};
pub use cliente::{Cliente, RegisterClienteRequest};
pub use empleado::Empleado;
pub use rol::Rol;
pub use usuario::Usuario;
