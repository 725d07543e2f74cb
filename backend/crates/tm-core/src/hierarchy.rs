//! Project hierarchy assembly.
//!
//! Turns the flat project rows returned by the persistence layer into an
//! ordered forest of [`TreeNode`]s annotated with task counters.
//!
//! Algorithm:
//! 1. Index records by id in O(N)
//! 2. Partition into roots (no parent, or parent not in the input) and
//!    per-parent child lists, preserving input order
//! 3. Stable-sort every sibling list by `position`
//! 4. Walk breadth-first from the roots to assign depths, failing as soon
//!    as a depth passes the limit; anything left unvisited sits on or
//!    below a parent cycle
//! 5. Build nodes bottom-up (reverse BFS order) so no recursion is needed
//!
//! Construction is iterative, but dropping and serializing a [`TreeNode`]
//! recurse once per level. The depth limit keeps both within a worker
//! thread's stack.

use crate::{CoreError, ProjectRecord, Result as CoreResult, TaskCount, TaskCountAggregate, TreeNode};

use std::collections::{HashMap, VecDeque};
use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, warn};

/// Deepest level [`transform_to_tree`] accepts (roots are level 0)
pub const DEFAULT_MAX_DEPTH: u32 = 100;

/// Assemble the full project forest.
///
/// Returns the roots, each carrying its nested children. Every input record
/// appears exactly once in the output. A record whose `parent_id` does not
/// resolve within `records` is placed as a root at depth 0.
///
/// Fails with [`CoreError::DuplicateProjectId`] if two records share an id,
/// with [`CoreError::CyclicHierarchy`] if parent links form a cycle, and
/// with [`CoreError::DepthExceeded`] if any project sits deeper than
/// [`DEFAULT_MAX_DEPTH`].
#[track_caller]
pub fn transform_to_tree(
    records: &[ProjectRecord],
    task_counts: Option<&TaskCountAggregate>,
) -> CoreResult<Vec<TreeNode>> {
    transform_to_tree_with_max_depth(records, task_counts, DEFAULT_MAX_DEPTH)
}

/// [`transform_to_tree`] with an explicit depth limit.
#[track_caller]
pub fn transform_to_tree_with_max_depth(
    records: &[ProjectRecord],
    task_counts: Option<&TaskCountAggregate>,
    max_depth: u32,
) -> CoreResult<Vec<TreeNode>> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    // Phase 1: id -> slot index
    let mut index_of: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        if index_of.insert(record.id.as_str(), idx).is_some() {
            return Err(CoreError::DuplicateProjectId {
                project_id: record.id.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    }

    // Phase 2: roots and child lists, both in input order
    let mut roots = Vec::new();
    let mut children_of: Vec<Vec<usize>> = vec![Vec::new(); records.len()];

    for (idx, record) in records.iter().enumerate() {
        match record
            .parent_id
            .as_deref()
            .and_then(|pid| index_of.get(pid))
        {
            Some(&parent_idx) => children_of[parent_idx].push(idx),
            None => {
                if let Some(pid) = record.parent_id.as_deref() {
                    debug!(
                        "Project {} references unknown parent {}, placing at root",
                        record.id, pid
                    );
                }
                roots.push(idx);
            }
        }
    }

    // Phase 3: sort_by_key is stable, so equal positions keep input order
    roots.sort_by_key(|&idx| records[idx].position);
    for siblings in &mut children_of {
        siblings.sort_by_key(|&idx| records[idx].position);
    }

    // Phase 4: depths in BFS order
    let mut depth = vec![0u32; records.len()];
    let mut order = Vec::with_capacity(records.len());
    let mut queue: VecDeque<usize> = roots.iter().copied().collect();

    while let Some(idx) = queue.pop_front() {
        order.push(idx);
        for &child in &children_of[idx] {
            depth[child] = depth[idx] + 1;
            if depth[child] > max_depth {
                warn!(
                    "Refusing to build project tree: {} is deeper than {} level(s)",
                    records[child].id, max_depth
                );
                return Err(CoreError::DepthExceeded {
                    project_id: records[child].id.clone(),
                    max_depth,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            queue.push_back(child);
        }
    }

    if order.len() != records.len() {
        let mut reached = vec![false; records.len()];
        for &idx in &order {
            reached[idx] = true;
        }

        let project_ids: Vec<String> = records
            .iter()
            .zip(reached)
            .filter(|(_, seen)| !seen)
            .map(|(record, _)| record.id.clone())
            .collect();

        warn!(
            "Refusing to build project tree: {} project(s) unreachable from any root",
            project_ids.len()
        );

        return Err(CoreError::CyclicHierarchy {
            project_ids,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // Phase 5: children always come later in BFS order, so reverse order
    // guarantees they are built before their parent
    let mut built: Vec<Option<TreeNode>> = (0..records.len()).map(|_| None).collect();

    for &idx in order.iter().rev() {
        let record = &records[idx];
        let counts = lookup_counts(task_counts, &record.id);

        let mut node = TreeNode::from_record(record, depth[idx], counts);
        node.children = children_of[idx]
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();

        built[idx] = Some(node);
    }

    let forest: Vec<TreeNode> = roots
        .iter()
        .filter_map(|&idx| built[idx].take())
        .collect();

    debug!(
        "Built project tree: {} record(s), {} root(s)",
        records.len(),
        forest.len()
    );

    Ok(forest)
}

/// Build a single node from a record and an already-assembled child list.
///
/// Depth is 0 and counts default to zero. `children` is attached as given;
/// ordering is the caller's responsibility.
pub fn transform_node(
    record: &ProjectRecord,
    children: Vec<TreeNode>,
    task_count: Option<TaskCount>,
) -> TreeNode {
    let mut node = TreeNode::from_record(record, 0, task_count.unwrap_or_default());
    node.children = children;
    node
}

/// Flatten a forest into pre-order (each parent followed by its subtree).
pub fn flatten_tree(roots: &[TreeNode]) -> Vec<&TreeNode> {
    roots.iter().flat_map(TreeNode::iter).collect()
}

fn lookup_counts(task_counts: Option<&TaskCountAggregate>, project_id: &str) -> TaskCount {
    task_counts
        .and_then(|counts| counts.get(project_id))
        .copied()
        .unwrap_or_default()
}
