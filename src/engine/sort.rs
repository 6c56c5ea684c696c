use chrono::NaiveDate;

use crate::model::Task;

/// Order tasks by (project, kind rank, start) and assign each its fixed
/// vertical slot. The sort is stable, so equal keys keep their input order
/// and re-sorting an already sorted collection is a no-op.
///
/// Tasks without a start date sort after dated tasks within their
/// (project, kind) group.
pub fn sort_hierarchy(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        a.project
            .cmp(&b.project)
            .then_with(|| a.kind.rank().cmp(&b.kind.rank()))
            .then_with(|| start_key(a).cmp(&start_key(b)))
    });
    for (i, task) in tasks.iter_mut().enumerate() {
        task.display_index = i as u32;
    }
}

fn start_key(task: &Task) -> NaiveDate {
    task.start.unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskKind;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn task(name: &str, project: &str, kind: TaskKind, start: Option<NaiveDate>) -> Task {
        let mut t = Task::new(name, project, kind);
        t.start = start;
        t
    }

    fn names(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn parents_precede_subs_precede_milestones() {
        let mut tasks = vec![
            task("m", "A", TaskKind::Milestone, Some(d(2025, 1, 1))),
            task("s", "A", TaskKind::Sub, Some(d(2025, 1, 1))),
            task("u", "A", TaskKind::Undefined, Some(d(2025, 1, 1))),
            task("p", "A", TaskKind::Parent, Some(d(2025, 1, 1))),
        ];
        sort_hierarchy(&mut tasks);
        assert_eq!(names(&tasks), vec!["p", "s", "m", "u"]);
    }

    #[test]
    fn projects_group_before_kind() {
        let mut tasks = vec![
            task("b-sub", "B", TaskKind::Sub, Some(d(2025, 1, 1))),
            task("a-mile", "A", TaskKind::Milestone, Some(d(2025, 1, 1))),
        ];
        sort_hierarchy(&mut tasks);
        assert_eq!(names(&tasks), vec!["a-mile", "b-sub"]);
    }

    #[test]
    fn ties_keep_input_order_and_resort_is_idempotent() {
        let mut tasks = vec![
            task("first", "A", TaskKind::Sub, Some(d(2025, 2, 1))),
            task("second", "A", TaskKind::Sub, Some(d(2025, 2, 1))),
            task("third", "A", TaskKind::Sub, Some(d(2025, 2, 1))),
        ];
        sort_hierarchy(&mut tasks);
        assert_eq!(names(&tasks), vec!["first", "second", "third"]);

        let snapshot = names(&tasks)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        sort_hierarchy(&mut tasks);
        assert_eq!(names(&tasks), snapshot);
    }

    #[test]
    fn undated_start_sorts_last_in_group() {
        let mut tasks = vec![
            task("undated", "A", TaskKind::Sub, None),
            task("dated", "A", TaskKind::Sub, Some(d(2025, 6, 1))),
        ];
        sort_hierarchy(&mut tasks);
        assert_eq!(names(&tasks), vec!["dated", "undated"]);
    }

    #[test]
    fn display_index_matches_position() {
        let mut tasks = vec![
            task("late", "A", TaskKind::Sub, Some(d(2025, 3, 1))),
            task("early", "A", TaskKind::Sub, Some(d(2025, 1, 1))),
        ];
        sort_hierarchy(&mut tasks);
        assert_eq!(tasks[0].name, "early");
        assert_eq!(tasks[0].display_index, 0);
        assert_eq!(tasks[1].display_index, 1);
    }
}
