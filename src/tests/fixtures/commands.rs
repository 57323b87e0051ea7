// Shared command fixtures for the judging use cases.

use crate::modules::judging::use_cases::submit_project::command::SubmitProject;
use crate::modules::judging::use_cases::submit_rating::command::SubmitRating;

pub struct SubmitRatingBuilder {
    inner: SubmitRating,
}

impl Default for SubmitRatingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubmitRatingBuilder {
    pub fn new() -> Self {
        Self {
            inner: SubmitRating {
                project_id: "proj1".to_string(),
                judge_id: "het@s4ds.com".to_string(),
                impact: 20.0,
                innovation: 25.0,
                feasibility: 20.0,
                presentation: 20.0,
            },
        }
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = v.into();
        self
    }

    pub fn judge_id(mut self, v: impl Into<String>) -> Self {
        self.inner.judge_id = v.into();
        self
    }

    pub fn scores(mut self, impact: f64, innovation: f64, feasibility: f64, presentation: f64) -> Self {
        self.inner.impact = impact;
        self.inner.innovation = innovation;
        self.inner.feasibility = feasibility;
        self.inner.presentation = presentation;
        self
    }

    pub fn build(self) -> SubmitRating {
        self.inner
    }
}

pub fn submit_project(team_name: &str, title: Option<&str>) -> SubmitProject {
    SubmitProject {
        team_name: team_name.to_string(),
        title: title.map(str::to_string),
        ..SubmitProject::default()
    }
}

#[cfg(test)]
mod submit_rating_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = SubmitRatingBuilder::default().build();
        assert_eq!(built.project_id, "proj1");
        assert_eq!(built.judge_id, "het@s4ds.com");
        assert_eq!(built.scores().sum(), 85.0);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = SubmitRatingBuilder::new()
            .project_id("proj9")
            .judge_id("nitesh@s4ds.com")
            .scores(1.0, 2.0, 3.0, 4.0)
            .build();
        assert_eq!(custom.project_id, "proj9");
        assert_eq!(custom.judge_id, "nitesh@s4ds.com");
        assert_eq!(custom.scores().sum(), 10.0);
    }
}
