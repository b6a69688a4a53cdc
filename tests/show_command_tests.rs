use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, workspace::*};

#[cfg(test)]
mod show_command_tests {
    use super::*;

    #[test]
    fn test_show_uninitialized_project() -> anyhow::Result<()> {
        let ws = setup_workspace()?;
        create_network_project(&ws)?;

        ws.command()?
            .args(["show", "network"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Environments"))
            .stdout(assertions::has_index(1))
            .stdout(predicate::str::contains("dev"))
            .stdout(predicate::str::contains("prod"))
            .stdout(predicate::str::contains("variables/backend/backend_dev.tfvars"))
            .stdout(assertions::not_initialized());

        Ok(())
    }

    #[test]
    fn test_show_initialized_project_infers_environment() -> anyhow::Result<()> {
        let ws = setup_workspace()?;
        create_initialized_network_project(&ws)?;

        ws.command()?
            .args(["show", "network"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Backend Type: s3"))
            .stdout(predicate::str::contains("Current Environment: dev"))
            .stdout(predicate::str::contains("Backend Config: backend_dev.tfvars"));

        Ok(())
    }

    #[test]
    fn test_show_marks_generic_backend() -> anyhow::Result<()> {
        let ws = setup_workspace()?;
        create_multi_backend_project(&ws)?;

        ws.command()?
            .args(["show", "platform"])
            .assert()
            .success()
            .stdout(predicate::str::contains("(generic)"))
            .stdout(predicate::str::contains("variables/backend/local/backend_dev2.tfvars"))
            .stdout(predicate::str::contains("variables/backend/s3/backend_dev2.tfvars"));

        Ok(())
    }

    #[test]
    fn test_show_by_index() -> anyhow::Result<()> {
        let ws = setup_workspace()?;
        create_network_project(&ws)?;

        ws.command()?
            .args(["show", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("network"));

        Ok(())
    }

    #[test]
    fn test_show_unknown_project() -> anyhow::Result<()> {
        let ws = setup_workspace()?;
        create_network_project(&ws)?;

        ws.command()?
            .args(["show", "compute"])
            .assert()
            .failure()
            .stderr(assertions::project_not_found("compute"));

        Ok(())
    }
}
