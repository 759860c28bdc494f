//! Prerequisite, availability and unit-progress computations.
//!
//! Every function here is pure: it takes the full course/progress data as
//! input and returns a value, so the engine can be tested without a store and
//! reused by any caller. Corequisites are never evaluated — they inform the
//! display but do not gate availability.

use crate::core::models::{Category, Course, CourseGroup, CurriculumTemplate, PassedCourse, UserProgress};
use std::collections::{HashMap, HashSet};

/// A course annotated with availability information for display
#[derive(Debug, Clone, PartialEq)]
pub struct AvailableCourse {
    /// The annotated course
    pub course: Course,
    /// Human-readable availability summary
    pub reason: String,
    /// Prerequisite ids not yet passed; `None` when all are met
    pub missing_prerequisites: Option<Vec<String>>,
}

/// Unit progress of a single group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupProgress {
    /// Units credited to the group: its own passed units plus incoming overflow
    pub passed: u32,
    /// Units the group requires
    pub required: u32,
    /// Units this group's own completion exceeds its own requirement by
    pub overflow: u32,
}

/// Collect the set of passed course ids from progress entries
#[must_use]
pub fn passed_ids(passed_courses: &[PassedCourse]) -> HashSet<&str> {
    passed_courses.iter().map(|p| p.course_id.as_str()).collect()
}

/// Whether every prerequisite of `course` is in the passed set.
///
/// A course with no prerequisites is always met. Corequisites are ignored.
#[must_use]
pub fn prerequisites_met(course: &Course, passed: &HashSet<&str>) -> bool {
    course
        .prerequisites
        .iter()
        .all(|id| passed.contains(id.as_str()))
}

/// Courses the student can take right now: not yet passed, all prerequisites met.
///
/// Input order is preserved.
#[must_use]
pub fn fully_available_courses<'a>(
    courses: &'a [Course],
    passed_courses: &[PassedCourse],
) -> Vec<&'a Course> {
    let passed = passed_ids(passed_courses);

    courses
        .iter()
        .filter(|c| !passed.contains(c.id.as_str()) && prerequisites_met(c, &passed))
        .collect()
}

/// Annotate every input course with its availability and blocking prerequisites.
///
/// Unlike [`fully_available_courses`], already-passed courses are not filtered
/// out; callers that want them excluded must do so themselves.
#[must_use]
pub fn available_courses(
    courses: &[Course],
    passed_courses: &[PassedCourse],
) -> Vec<AvailableCourse> {
    let passed = passed_ids(passed_courses);

    courses
        .iter()
        .map(|course| {
            let missing: Vec<String> = course
                .prerequisites
                .iter()
                .filter(|id| !passed.contains(id.as_str()))
                .cloned()
                .collect();

            if missing.is_empty() {
                AvailableCourse {
                    course: course.clone(),
                    reason: "all prerequisites passed".to_string(),
                    missing_prerequisites: None,
                }
            } else {
                AvailableCourse {
                    reason: format!("missing {} prerequisite(s)", missing.len()),
                    course: course.clone(),
                    missing_prerequisites: Some(missing),
                }
            }
        })
        .collect()
}

/// Sum of units over courses whose id appears in the passed set.
///
/// Progress entries referencing unknown course ids contribute nothing.
#[must_use]
pub fn units_completed(courses: &[Course], passed_courses: &[PassedCourse]) -> u32 {
    let passed = passed_ids(passed_courses);

    courses
        .iter()
        .filter(|c| passed.contains(c.id.as_str()))
        .map(|c| c.units)
        .sum()
}

/// Passed units summed per category.
///
/// Categories with no passed units are absent from the map (callers default
/// to zero on lookup); uncategorized courses are skipped.
#[must_use]
pub fn units_by_category(
    courses: &[Course],
    passed_courses: &[PassedCourse],
) -> HashMap<Category, u32> {
    let passed = passed_ids(passed_courses);
    let mut by_category = HashMap::new();

    for course in courses {
        if !passed.contains(course.id.as_str()) {
            continue;
        }
        if let Some(category) = course.category {
            *by_category.entry(category).or_insert(0) += course.units;
        }
    }

    by_category
}

/// Units a group's own courses contribute given the passed set
fn own_passed_units(group: &CourseGroup, passed: &HashSet<&str>) -> u32 {
    group
        .courses
        .iter()
        .filter(|c| passed.contains(c.id.as_str()))
        .map(|c| c.units)
        .sum()
}

/// Unit progress for one group of a template.
///
/// The reported `passed` value is the group's own passed units plus the
/// overflow of every other group that names this group as its overflow
/// target. Overflow is single hop: only units earned directly within a group
/// count toward what it can export, so received overflow is never forwarded.
///
/// An unknown `group_id` yields all zeros rather than an error.
#[must_use]
pub fn group_progress(
    template: &CurriculumTemplate,
    progress: &UserProgress,
    group_id: &str,
) -> GroupProgress {
    let Some(group) = template.find_group(group_id) else {
        return GroupProgress::default();
    };

    let passed = passed_ids(&progress.passed_courses);
    let own = own_passed_units(group, &passed);

    let incoming: u32 = template
        .groups
        .iter()
        .filter(|g| g.id != group_id && g.overflow_target_group_id.as_deref() == Some(group_id))
        .map(|g| own_passed_units(g, &passed).saturating_sub(g.required_units))
        .sum();

    GroupProgress {
        passed: own + incoming,
        required: group.required_units,
        overflow: own.saturating_sub(group.required_units),
    }
}

/// Completion percentage clamped to `[0, 100]`.
///
/// A zero requirement counts as fully complete, guarding the division.
#[must_use]
pub fn completion_percent(passed: u32, required: u32) -> f32 {
    if required == 0 {
        return 100.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let percent = (passed as f32 / required as f32) * 100.0;
    percent.clamp(0.0, 100.0)
}

/// Get a course by id
#[must_use]
pub fn course_by_id<'a>(courses: &'a [Course], course_id: &str) -> Option<&'a Course> {
    courses.iter().find(|c| c.id == course_id)
}

/// Get the courses matching a list of ids, preserving input course order
#[must_use]
pub fn courses_by_ids<'a>(courses: &'a [Course], course_ids: &[String]) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|c| course_ids.contains(&c.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, units: u32, prereqs: &[&str]) -> Course {
        let mut c = Course::new(id.to_string(), format!("Course {id}"), units);
        for p in prereqs {
            c.add_prerequisite((*p).to_string());
        }
        c
    }

    fn passed(ids: &[&str]) -> Vec<PassedCourse> {
        ids.iter()
            .map(|id| PassedCourse::new((*id).to_string(), 1))
            .collect()
    }

    /// The worked overflow scenario: a 12-unit core group and a 6-unit
    /// elective group overflowing into it.
    fn overflow_template() -> CurriculumTemplate {
        let mut core = CourseGroup::new("core".to_string(), "Core".to_string(), 12);
        core.courses.push(course("a", 4, &[]));
        core.courses.push(course("b", 4, &[]));
        core.courses.push(course("c", 4, &[]));

        let mut elective = CourseGroup::new("elective".to_string(), "Electives".to_string(), 6);
        elective.overflow_target_group_id = Some("core".to_string());
        elective.courses.push(course("d", 4, &[]));
        elective.courses.push(course("e", 4, &[]));

        let mut template = CurriculumTemplate::new(
            "cs".to_string(),
            "CS".to_string(),
            "Test University".to_string(),
            18,
        );
        template.groups.push(core);
        template.groups.push(elective);
        template
    }

    #[test]
    fn no_prerequisites_is_always_met() {
        let c = course("x", 3, &[]);
        assert!(prerequisites_met(&c, &HashSet::new()));
    }

    #[test]
    fn all_prerequisites_must_be_passed() {
        let c = course("x", 3, &["a", "b"]);

        let mut ids = HashSet::new();
        ids.insert("a");
        assert!(!prerequisites_met(&c, &ids));

        ids.insert("b");
        assert!(prerequisites_met(&c, &ids));
    }

    #[test]
    fn corequisites_do_not_gate() {
        let mut c = course("x", 3, &[]);
        c.add_corequisite("lab".to_string());

        assert!(prerequisites_met(&c, &HashSet::new()));
    }

    #[test]
    fn fully_available_excludes_passed_courses() {
        let courses = vec![course("a", 3, &[]), course("b", 3, &[])];
        let available = fully_available_courses(&courses, &passed(&["a"]));

        let ids: Vec<&str> = available.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn blocked_course_appears_after_prerequisite_toggles() {
        let courses = vec![course("y", 3, &[]), course("x", 3, &["y"])];

        let before = fully_available_courses(&courses, &[]);
        assert!(!before.iter().any(|c| c.id == "x"));

        let after = fully_available_courses(&courses, &passed(&["y"]));
        assert!(after.iter().any(|c| c.id == "x"));
    }

    #[test]
    fn fully_available_preserves_input_order() {
        let courses = vec![course("c", 1, &[]), course("a", 1, &[]), course("b", 1, &[])];
        let available = fully_available_courses(&courses, &[]);

        let ids: Vec<&str> = available.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn available_courses_reports_missing_prerequisites() {
        let courses = vec![course("a", 3, &[]), course("x", 3, &["a", "b"])];
        let annotated = available_courses(&courses, &passed(&["a"]));

        let a = &annotated[0];
        assert!(a.missing_prerequisites.is_none());
        assert_eq!(a.reason, "all prerequisites passed");

        let x = &annotated[1];
        assert_eq!(
            x.missing_prerequisites.as_deref(),
            Some(&["b".to_string()][..])
        );
        assert_eq!(x.reason, "missing 1 prerequisite(s)");
    }

    #[test]
    fn available_courses_does_not_filter_passed() {
        let courses = vec![course("a", 3, &[])];
        let annotated = available_courses(&courses, &passed(&["a"]));

        assert_eq!(annotated.len(), 1);
    }

    #[test]
    fn units_completed_sums_passed_units() {
        let courses = vec![course("a", 4, &[]), course("b", 3, &[]), course("c", 2, &[])];

        assert_eq!(units_completed(&courses, &passed(&["a", "c"])), 6);
        assert_eq!(units_completed(&courses, &[]), 0);
    }

    #[test]
    fn dangling_progress_entries_are_ignored() {
        let courses = vec![course("a", 4, &[])];

        assert_eq!(units_completed(&courses, &passed(&["a", "ghost"])), 4);
    }

    #[test]
    fn units_by_category_omits_zero_categories() {
        let mut a = course("a", 4, &[]);
        a.category = Some(Category::General);
        let mut b = course("b", 3, &[]);
        b.category = Some(Category::General);
        let mut c = course("c", 2, &[]);
        c.category = Some(Category::RequiredCore);
        let uncategorized = course("d", 5, &[]);

        let courses = vec![a, b, c, uncategorized];
        let by_category = units_by_category(&courses, &passed(&["a", "b", "d"]));

        assert_eq!(by_category.get(&Category::General), Some(&7));
        assert_eq!(by_category.get(&Category::RequiredCore), None);
        assert_eq!(by_category.len(), 1);
    }

    #[test]
    fn group_overflow_is_own_excess() {
        let template = overflow_template();
        let progress = UserProgress {
            template_id: "cs".to_string(),
            passed_courses: passed(&["a", "b", "c"]),
        };

        // 12 passed of 12 required: no overflow yet
        let core = group_progress(&template, &progress, "core");
        assert_eq!(core.passed, 12);
        assert_eq!(core.overflow, 0);
    }

    #[test]
    fn overflow_credits_the_target_group() {
        let template = overflow_template();
        let progress = UserProgress {
            template_id: "cs".to_string(),
            passed_courses: passed(&["d", "e"]),
        };

        // Electives: 8 of 6 passed, 2 units overflow out
        let elective = group_progress(&template, &progress, "elective");
        assert_eq!(elective.passed, 8);
        assert_eq!(elective.required, 6);
        assert_eq!(elective.overflow, 2);

        // Core receives exactly those 2 units and exports nothing itself
        let core = group_progress(&template, &progress, "core");
        assert_eq!(core.passed, 2);
        assert_eq!(core.required, 12);
        assert_eq!(core.overflow, 0);
    }

    #[test]
    fn received_overflow_is_not_forwarded() {
        // elective -> core -> capstone; only core's own units may reach capstone
        let mut template = overflow_template();
        template.groups[0].overflow_target_group_id = Some("capstone".to_string());
        template
            .groups
            .push(CourseGroup::new("capstone".to_string(), "Capstone".to_string(), 4));

        // Electives fully passed (8 of 6, overflow 2), no core courses passed:
        // core holds 2 received units but has earned nothing, so capstone gets 0.
        let progress = UserProgress {
            template_id: "cs".to_string(),
            passed_courses: passed(&["d", "e"]),
        };

        let capstone = group_progress(&template, &progress, "capstone");
        assert_eq!(capstone.passed, 0);
    }

    #[test]
    fn unknown_group_yields_zeros() {
        let template = overflow_template();
        let progress = UserProgress::default();

        assert_eq!(
            group_progress(&template, &progress, "missing"),
            GroupProgress::default()
        );
    }

    #[test]
    fn completion_percent_clamps() {
        assert!((completion_percent(3, 6) - 50.0).abs() < f32::EPSILON);
        assert!((completion_percent(9, 6) - 100.0).abs() < f32::EPSILON);
        assert!((completion_percent(0, 0) - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn lookup_helpers() {
        let courses = vec![course("a", 3, &[]), course("b", 3, &[])];

        assert!(course_by_id(&courses, "a").is_some());
        assert!(course_by_id(&courses, "z").is_none());

        let found = courses_by_ids(&courses, &["b".to_string(), "z".to_string()]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "b");
    }
}
