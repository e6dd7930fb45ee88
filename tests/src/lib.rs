// Workspace integration tests live in tests/ next to this crate.
