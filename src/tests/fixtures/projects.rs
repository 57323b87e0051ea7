use crate::modules::judging::core::project::Project;

pub fn project(id: &str, team_name: &str) -> Project {
    Project {
        id: id.to_string(),
        team_name: Some(team_name.to_string()),
        ..Project::default()
    }
}
