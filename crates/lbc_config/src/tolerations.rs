use crate::flag::FlagValue;
use lbc_toleration::AdditionalTolerationKeys;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// An ordered list of strings built from a flag that accepts comma separated values and may be
/// repeated. Every update forwards the whole list to the toleration registry.
///
/// Values are never deduplicated or removed. Not `Clone`, a copy would share the registry.
#[derive(Debug)]
pub struct CumulativeStringList {
    values: Vec<String>,
    registry: Arc<dyn AdditionalTolerationKeys>,
}

impl CumulativeStringList {
    pub fn new(registry: Arc<dyn AdditionalTolerationKeys>) -> Self {
        Self {
            values: Vec::new(),
            registry,
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FlagValue for CumulativeStringList {
    type Err = Infallible;

    /// Appends the comma separated tokens of `raw` verbatim. An empty `raw` is ignored and does
    /// not reach the registry.
    fn set(&mut self, raw: &str) -> Result<(), Self::Err> {
        if raw.is_empty() {
            return Ok(());
        }
        self.values.extend(raw.split(',').map(str::to_string));
        self.registry.add_additional_toleration_keys(&self.values);
        Ok(())
    }
}

/// Joins the values with commas. Values that contain a comma themselves will not survive a
/// round-trip through [FlagValue::set].
impl Display for CumulativeStringList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.values.join(","))
    }
}

impl<'a> IntoIterator for &'a CumulativeStringList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRegistry;
    use lbc_toleration::TolerationRegistry;

    fn list() -> (CumulativeStringList, Arc<RecordingRegistry>) {
        let registry = Arc::new(RecordingRegistry::default());
        (CumulativeStringList::new(registry.clone()), registry)
    }

    #[test]
    fn should_accumulate_tokens_across_calls() {
        let (mut list, _) = list();
        list.set("a,b").unwrap();
        list.set("c").unwrap();
        list.set("d,e,f").unwrap();

        assert_eq!(list.values(), ["a", "b", "c", "d", "e", "f"]);
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn should_keep_tokens_verbatim() {
        let (mut list, _) = list();
        list.set(" a ,b,,c,").unwrap();

        assert_eq!(list.values(), [" a ", "b", "", "c", ""]);
    }

    #[test]
    fn should_keep_duplicates() {
        let (mut list, registry) = list();
        list.set("a,a").unwrap();
        list.set("a").unwrap();

        assert_eq!(list.values(), ["a", "a", "a"]);
        assert_eq!(registry.last().unwrap(), ["a", "a", "a"]);
    }

    #[test]
    fn should_ignore_empty_input() {
        let (mut list, registry) = list();
        list.set("").unwrap();
        assert!(list.is_empty());
        assert!(registry.calls().is_empty());

        list.set("a").unwrap();
        list.set("").unwrap();
        assert_eq!(list.values(), ["a"]);
        assert_eq!(registry.calls().len(), 1);
    }

    #[test]
    fn should_forward_the_full_list_on_every_update() {
        let (mut list, registry) = list();
        list.set("a,b").unwrap();
        list.set("c").unwrap();

        assert_eq!(
            registry.calls(),
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["a".to_string(), "b".to_string(), "c".to_string()],
            ]
        );
    }

    #[test]
    fn should_render_comma_separated() {
        let (mut list, _) = list();
        assert_eq!(list.to_string(), "");

        list.set("a,b").unwrap();
        list.set("c").unwrap();
        assert_eq!(list.to_string(), "a,b,c");
    }

    #[test]
    fn should_round_trip_through_render() {
        let (mut list, _) = list();
        list.set("node.kubernetes.io/unreachable,dedicated").unwrap();
        list.set("lb").unwrap();

        let rendered = list.to_string();
        let (mut copy, _) = self::list();
        copy.set(&rendered).unwrap();
        assert_eq!(copy.values(), list.values());
    }

    #[test]
    fn should_not_round_trip_tokens_containing_commas() {
        let (mut list, _) = list();
        list.set("a").unwrap();
        // set() never produces such a token
        list.values.push("b,c".to_string());

        let (mut copy, _) = self::list();
        copy.set(&list.to_string()).unwrap();
        assert_eq!(copy.values(), ["a", "b", "c"]);
        assert_ne!(copy.values(), list.values());
    }

    #[test]
    fn should_not_be_cloneable() {
        // Inference of `A` is ambiguous, and fails to compile, once the type implements Clone
        trait AmbiguousIfClone<A> {
            fn check() {}
        }
        impl<T: ?Sized> AmbiguousIfClone<()> for T {}
        struct Cloneable;
        impl<T: ?Sized + Clone> AmbiguousIfClone<Cloneable> for T {}

        <CumulativeStringList as AmbiguousIfClone<_>>::check();
    }

    #[test]
    fn should_propagate_into_toleration_registry() {
        let registry = Arc::new(TolerationRegistry::new());
        let mut list = CumulativeStringList::new(registry.clone());
        list.set("a,b").unwrap();
        list.set("c").unwrap();

        assert_eq!(registry.additional_keys(), ["a", "b", "c"]);
    }
}
