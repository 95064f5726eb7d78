//! Startup data sets.

use crate::config::SeedProfile;
use crate::models::assessment::Assessment;
use crate::models::candidate::{Candidate, CandidateStatus, Stage};
use crate::models::job::{Job, JobStatus};
use crate::models::question::{Question, QuestionType};
use crate::models::EntityId;

#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub jobs: Vec<Job>,
    pub candidates: Vec<Candidate>,
    pub assessments: Vec<Assessment>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn job(
    id: EntityId,
    title: &str,
    department: &str,
    description: &str,
    requirements: &[&str],
    location: &str,
) -> Job {
    Job {
        id,
        title: title.to_string(),
        department: department.to_string(),
        status: JobStatus::Active,
        archived: false,
        description: description.to_string(),
        requirements: strings(requirements),
        location: location.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn candidate(
    id: EntityId,
    name: &str,
    email: &str,
    phone: &str,
    job_id: EntityId,
    stage: Stage,
    skills: &[&str],
    experience: &str,
) -> Candidate {
    Candidate {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        status: CandidateStatus::Active,
        archived: false,
        applied_jobs: vec![job_id],
        stage,
        skills: strings(skills),
        experience: experience.to_string(),
    }
}

fn choice(id: EntityId, text: &str, options: &[&str], correct: &str) -> Question {
    Question {
        id,
        question: text.to_string(),
        question_type: QuestionType::MultipleChoice,
        options: Some(strings(options)),
        correct_answer: correct.to_string(),
    }
}

fn open_text(id: EntityId, text: &str) -> Question {
    Question {
        id,
        question: text.to_string(),
        question_type: QuestionType::Text,
        options: None,
        correct_answer: String::new(),
    }
}

impl Seed {
    /// Startup data for `profile`; `None` means the store starts empty.
    pub fn for_profile(profile: SeedProfile) -> Option<Self> {
        match profile {
            SeedProfile::Demo => Some(Self::demo()),
            SeedProfile::Bulk => Some(Self::bulk()),
            SeedProfile::None => None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// A handful of realistic records for clicking around.
    pub fn demo() -> Self {
        let jobs = vec![
            job(
                1,
                "Frontend Developer",
                "Engineering",
                "Looking for a React developer with 3+ years experience",
                &["React", "TypeScript", "CSS"],
                "San Francisco",
            ),
            job(
                2,
                "Backend Developer",
                "Engineering",
                "Node.js backend developer needed",
                &["Node.js", "Express", "MongoDB"],
                "New York",
            ),
            job(
                3,
                "UX Designer",
                "Design",
                "Senior UX designer for mobile apps",
                &["Figma", "Design Systems", "User Research"],
                "Remote",
            ),
        ];

        let candidates = vec![
            candidate(
                1,
                "John Doe",
                "john@example.com",
                "555-1234",
                1,
                Stage::Screening,
                &["React", "JavaScript", "CSS"],
                "3 years",
            ),
            candidate(
                2,
                "Jane Smith",
                "jane@example.com",
                "555-5678",
                2,
                Stage::Interview,
                &["Node.js", "Python", "SQL"],
                "5 years",
            ),
            candidate(
                3,
                "Mike Johnson",
                "mike@example.com",
                "555-9012",
                3,
                Stage::Offer,
                &["UI/UX", "Figma", "Prototyping"],
                "4 years",
            ),
        ];

        let assessments = vec![
            Assessment {
                id: 1,
                job_id: 1,
                title: "Frontend Skills Assessment".to_string(),
                questions: vec![
                    choice(
                        1,
                        "What is React?",
                        &["Library", "Framework", "Language", "Tool"],
                        "Library",
                    ),
                    open_text(2, "Explain closures in JavaScript"),
                ],
                time_limit: 60,
                candidate_responses: Vec::new(),
            },
            Assessment {
                id: 2,
                job_id: 2,
                title: "Backend Development Test".to_string(),
                questions: vec![
                    choice(
                        1,
                        "What is REST API?",
                        &["Protocol", "Architecture", "Framework", "Database"],
                        "Architecture",
                    ),
                    open_text(2, "Explain database normalization"),
                ],
                time_limit: 90,
                candidate_responses: Vec::new(),
            },
        ];

        Self {
            jobs,
            candidates,
            assessments,
        }
    }

    /// 25 jobs, 1000 candidates and 3 long assessments of generated data.
    pub fn bulk() -> Self {
        const DEPARTMENTS: [&str; 4] = ["Engineering", "Design", "HR", "Marketing"];
        const LOCATIONS: [&str; 4] = ["Remote", "San Francisco", "New York", "London"];
        const SKILLS: [&str; 4] = ["Skill A", "Skill B", "Skill C", "Skill D"];
        const STAGES: [&str; 6] = ["applied", "screening", "tech", "offer", "hired", "rejected"];
        const QUESTION_TYPES: [&str; 4] = ["multiple-choice", "text", "numeric", "file-upload"];

        let jobs = (0..25u64)
            .map(|i| {
                let slot = i as usize;
                // Every third job (offset 1) is generated already archived.
                let archived = i % 3 == 1;
                Job {
                    id: i + 1,
                    title: format!("Job {}", i + 1),
                    department: DEPARTMENTS[slot % 4].to_string(),
                    status: match i % 3 {
                        0 => JobStatus::Active,
                        1 => JobStatus::Inactive,
                        _ => JobStatus::Closed,
                    },
                    archived,
                    description: format!("Description for job {}", i + 1),
                    requirements: strings(&SKILLS[..slot % 4 + 1]),
                    location: LOCATIONS[slot % 4].to_string(),
                }
            })
            .collect();

        let candidates = (0..1000u64)
            .map(|i| {
                let slot = i as usize;
                Candidate {
                    id: i + 1,
                    name: format!("Candidate {}", i + 1),
                    email: format!("candidate{}@example.com", i + 1),
                    phone: format!("555-{}", 1000 + i),
                    status: CandidateStatus::Active,
                    archived: false,
                    applied_jobs: vec![i % 25 + 1],
                    stage: Stage::from(STAGES[slot % 6]),
                    skills: strings(&SKILLS[..slot % 4 + 1]),
                    experience: format!("{} years", i % 10 + 1),
                }
            })
            .collect();

        let assessments = (0..3u64)
            .map(|i| Assessment {
                id: i + 1,
                job_id: i + 1,
                title: format!("Assessment {}", i + 1),
                questions: (0..12u64)
                    .map(|q| {
                        let multiple_choice = q % 4 == 0;
                        Question {
                            id: q + 1,
                            question: format!("Question {} for Assessment {}", q + 1, i + 1),
                            question_type: QuestionType::from(
                                QUESTION_TYPES[q as usize % 4].to_string(),
                            ),
                            options: multiple_choice
                                .then(|| strings(&["Option 1", "Option 2", "Option 3"])),
                            correct_answer: if multiple_choice {
                                "Option 1".to_string()
                            } else {
                                String::new()
                            },
                        }
                    })
                    .collect(),
                time_limit: 60 + i as u32 * 30,
                candidate_responses: Vec::new(),
            })
            .collect();

        Self {
            jobs,
            candidates,
            assessments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_profile_shape() {
        let seed = Seed::bulk();
        assert_eq!(seed.jobs.len(), 25);
        assert_eq!(seed.candidates.len(), 1000);
        assert_eq!(seed.assessments.len(), 3);
        assert_eq!(seed.jobs.iter().filter(|job| job.archived).count(), 8);
        assert!(seed
            .assessments
            .iter()
            .all(|assessment| assessment.questions.len() == 12
                && assessment.questions.iter().all(Question::options_consistent)));
        assert_eq!(seed.candidates[2].stage, Stage::Tech);
    }

    #[test]
    fn none_profile_has_no_seed() {
        assert!(Seed::for_profile(SeedProfile::None).is_none());
        let demo = Seed::for_profile(SeedProfile::Demo).unwrap();
        assert_eq!(demo.jobs.len(), 3);
        assert_eq!(Seed::for_profile(SeedProfile::Bulk).unwrap().candidates.len(), 1000);
    }

    #[test]
    fn demo_ids_are_contiguous() {
        let seed = Seed::demo();
        let ids: Vec<_> = seed.jobs.iter().map(|job| job.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
