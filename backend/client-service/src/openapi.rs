use utoipa::OpenApi;

use crate::handlers;
use crate::handlers::clientes::RegisterClienteResponse;
use crate::models::{Cita, Cliente, Empleado, NewCitaRequest, RegisterClienteRequest, Rol, Usuario};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Amara Client Service",
        description = "Spa-management backend: client registration, accounts, employees, roles and appointments"
    ),
    paths(
        handlers::clientes::register_cliente,
        handlers::clientes::list_clientes,
        handlers::usuarios::list_usuarios,
        handlers::empleados::list_empleados,
        handlers::roles::list_roles,
        handlers::citas::list_citas,
        handlers::citas::create_cita,
    ),
    components(schemas(
        Cliente,
        RegisterClienteRequest,
        RegisterClienteResponse,
        Usuario,
        Empleado,
        Rol,
        Cita,
        NewCitaRequest,
    )),
    tags(
        (name = "Clientes", description = "Client registration and listing"),
        (name = "Usuarios", description = "Account listing"),
        (name = "Empleados", description = "Employee listing"),
        (name = "Roles", description = "Role listing"),
        (name = "Citas", description = "Appointment listing and creation"),
    )
)]
pub struct ApiDoc;
