//! Workspace-level integration test package for FibSpiral.
