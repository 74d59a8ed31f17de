pub mod synthetic_stack;
