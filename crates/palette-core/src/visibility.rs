//! Which sessions count as selectable root sessions, and in what order.

use palette_types::session::{SessionMap, SessionMeta};

/// A session is listed only when it is a top-level session that is neither
/// hidden nor archived.
pub fn is_visible_root_session(session: &SessionMeta) -> bool {
    !session.hidden && !session.is_archived && session.parent_session_id.is_none()
}

/// Visible root sessions, most recent first.
///
/// Sessions without a timestamp sort as 0 (last). Equal timestamps fall back
/// to ascending id so the result never depends on map iteration order.
pub fn get_visible_root_sessions(
    sessions: &SessionMap,
    limit: Option<usize>,
) -> Vec<&SessionMeta> {
    let mut visible: Vec<&SessionMeta> = sessions
        .values()
        .filter(|s| is_visible_root_session(s))
        .collect();

    visible.sort_by(|a, b| {
        let a_ts = a.last_message_at.unwrap_or(0);
        let b_ts = b.last_message_at.unwrap_or(0);
        b_ts.cmp(&a_ts).then_with(|| a.id.cmp(&b.id))
    });

    if let Some(limit) = limit {
        visible.truncate(limit);
    }
    visible
}
