//! Name-ordered, capped result groups for sources, skills and workspaces.

use std::cmp::Ordering;

use palette_types::skill::Skill;
use palette_types::source::SourceConfig;
use palette_types::workspace::WorkspaceOption;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub use palette_types::config::DEFAULT_MAX_RESULTS_PER_GROUP;

/// Locale-style ordering in three passes: base letters ignoring case and
/// accents, then accents (unaccented first), then case (lowercase first).
///
/// Identical names compare `Equal`, so a stable sort keeps their input order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        // Uppercase code points sort below lowercase ones, hence the swap.
        .then_with(|| b.cmp(a))
}

/// Lowercased, decomposed, combining marks dropped: "Émile" -> "emile"
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    accented_letters(s).filter(|c| !is_combining_mark(*c))
}

/// Lowercased and decomposed, marks kept: "Émile" -> "e\u{301}mile"
fn accented_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Filter, sort by name, cap.
pub fn rank_by_name<'a, T, N, F>(items: &'a [T], name_of: N, include: F, cap: usize) -> Vec<&'a T>
where
    N: Fn(&T) -> &str,
    F: Fn(&T) -> bool,
{
    let mut ranked: Vec<&T> = items.iter().filter(|item| include(*item)).collect();
    ranked.sort_by(|a, b| locale_compare(name_of(*a), name_of(*b)));
    ranked.truncate(cap);
    ranked
}

/// Non-builtin sources by name
pub fn rank_sources(sources: &[SourceConfig], cap: usize) -> Vec<&SourceConfig> {
    rank_by_name(sources, |s| s.name.as_str(), |s| !s.is_builtin, cap)
}

pub fn rank_skills(skills: &[Skill], cap: usize) -> Vec<&Skill> {
    rank_by_name(skills, |s| s.metadata.name.as_str(), |_| true, cap)
}

pub fn rank_workspaces(workspaces: &[WorkspaceOption], cap: usize) -> Vec<&WorkspaceOption> {
    rank_by_name(workspaces, |w| w.name.as_str(), |_| true, cap)
}
