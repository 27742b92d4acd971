mod naming;
mod schema;
mod support;
