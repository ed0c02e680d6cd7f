mod command_scope_test;
mod support;
