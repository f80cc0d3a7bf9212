//! Resolution of destination member names to source paths.

use crate::accessor::{Getter, SourcePath};
use crate::{shape::Member, Error, Result, Shape};

use std::sync::Arc;

/// Finds a source path whose member words concatenate to `name`.
///
/// A readable value member matching all of the words wins. Otherwise each
/// prefix of the words is tried against nested object members, and the rest
/// of the words are resolved against the nested shape. `companyName` thus
/// resolves to `company.name` when `company` is a nested member.
pub fn resolve_member(source: &Shape, name: &str) -> Option<SourcePath> {
    let words = std_util::str::words(name);
    if words.is_empty() {
        return None;
    }

    let mut hops = vec![];
    if !resolve_words(source, &words, &mut hops) {
        return None;
    }

    Some(into_path(hops))
}

fn resolve_words(
    shape: &Shape,
    words: &[String],
    hops: &mut Vec<(String, Arc<dyn Getter>)>,
) -> bool {
    if let Some(member) = shape.find(words) {
        if let (false, Some(getter)) = (member.is_object(), member.getter()) {
            hops.push((member.name().to_string(), getter.clone()));
            return true;
        }
    }

    for split in 1..words.len() {
        let (prefix, rest) = words.split_at(split);

        let Some((member, nested, getter)) = nested_member(shape, prefix) else {
            continue;
        };

        hops.push((member.name().to_string(), getter));
        if resolve_words(&nested, rest, hops) {
            return true;
        }
        hops.pop();
    }

    false
}

/// Resolves an explicit dotted path such as `company.name`.
///
/// Each segment is matched by words, so `company.display_name` finds a
/// `displayName` member. All segments but the last must name nested objects.
pub fn resolve_path(source: &Shape, path: &str) -> Result<SourcePath> {
    let segments: Vec<_> = path.split('.').map(str::trim).collect();
    let Some((last, nested)) = segments.split_last() else {
        return Err(Error::unknown_member(source.ty().name(), path));
    };

    let mut hops = vec![];
    let mut shape = source.clone();

    for segment in nested {
        let words = std_util::str::words(segment);
        let Some((member, next, getter)) = nested_member(&shape, &words) else {
            return Err(Error::unknown_member(shape.ty().name(), *segment));
        };

        hops.push((member.name().to_string(), getter));
        shape = next;
    }

    let words = std_util::str::words(last);
    let member = shape
        .find(&words)
        .filter(|member| !member.is_object())
        .ok_or_else(|| Error::unknown_member(shape.ty().name(), *last))?;

    let Some(getter) = member.getter() else {
        crate::bail!(
            "member `{}` of `{}` cannot be read",
            member.name(),
            shape.ty()
        );
    };

    hops.push((member.name().to_string(), getter.clone()));
    Ok(into_path(hops))
}

fn nested_member<'a>(
    shape: &'a Shape,
    words: &[String],
) -> Option<(&'a Member, Shape, Arc<dyn Getter>)> {
    let member = shape.find(words)?;
    let nested = member.nested_shape()?;
    let getter = member.getter()?.clone();
    Some((member, nested, getter))
}

fn into_path(hops: Vec<(String, Arc<dyn Getter>)>) -> SourcePath {
    let (names, getters): (Vec<_>, Vec<_>) = hops.into_iter().unzip();
    SourcePath::new(names.join("."), getters)
}
