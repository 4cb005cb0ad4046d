mod backend_tests;
mod memory_store_tests;
