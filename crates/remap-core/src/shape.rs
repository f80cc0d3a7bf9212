//! Member metadata for mapped types.
//!
//! A [`Shape`] lists the members of one Rust type together with the typed
//! accessors that read and write them. Shapes are assembled once per type,
//! either by `#[derive(Reflect)]` or by hand with [`Shape::builder`], and are
//! only consulted while a type map is being configured.

use crate::accessor::{
    FieldGetter, FieldSetter, Getter, MethodGetter, MethodSetter, NestedGetter, Setter,
};
use crate::{FromValue, TypeRef, Value};

use indexmap::IndexMap;
use std::{any::Any, marker::PhantomData, sync::Arc};

/// Types that describe their own members.
pub trait Reflect: Any {
    fn shape() -> Shape;
}

#[derive(Clone)]
pub struct Shape {
    ty: TypeRef,

    /// Members keyed by name, in declaration order
    members: IndexMap<String, Member>,
}

#[derive(Clone)]
pub struct Member {
    name: String,

    /// Lowercase words of `name`, used for matching
    words: Vec<String>,

    kind: MemberKind,
    getter: Option<Arc<dyn Getter>>,
    setter: Option<Arc<dyn Setter>>,
}

#[derive(Clone, Copy)]
pub enum MemberKind {
    /// A scalar or list member read and written as a [`Value`].
    Value,

    /// A nested object that flattened paths may step into.
    Object(fn() -> Shape),
}

impl Shape {
    pub fn builder<T: Any>() -> ShapeBuilder<T> {
        ShapeBuilder {
            shape: Shape {
                ty: TypeRef::of::<T>(),
                members: IndexMap::new(),
            },
            _p: PhantomData,
        }
    }

    pub fn of<T: Reflect>() -> Shape {
        T::shape()
    }

    pub fn ty(&self) -> TypeRef {
        self.ty
    }

    pub fn members(&self) -> impl ExactSizeIterator<Item = &Member> {
        self.members.values()
    }

    /// Looks up a member by its exact name.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// Looks up a member whose name splits into `words`.
    pub fn find(&self, words: &[String]) -> Option<&Member> {
        self.members.values().find(|member| member.words == words)
    }
}

impl core::fmt::Debug for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Shape")
            .field("ty", &self.ty.name())
            .field("members", &self.members.values().collect::<Vec<_>>())
            .finish()
    }
}

impl Member {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    pub fn getter(&self) -> Option<&Arc<dyn Getter>> {
        self.getter.as_ref()
    }

    pub fn setter(&self) -> Option<&Arc<dyn Setter>> {
        self.setter.as_ref()
    }

    pub fn is_readable(&self) -> bool {
        self.getter.is_some()
    }

    pub fn is_writable(&self) -> bool {
        self.setter.is_some()
    }

    pub fn is_object(&self) -> bool {
        matches!(self.kind, MemberKind::Object(_))
    }

    /// The shape of the nested object, if this member is one.
    pub fn nested_shape(&self) -> Option<Shape> {
        match self.kind {
            MemberKind::Object(shape) => Some(shape()),
            MemberKind::Value => None,
        }
    }
}

impl core::fmt::Debug for Member {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("object", &self.is_object())
            .field("readable", &self.is_readable())
            .field("writable", &self.is_writable())
            .finish()
    }
}

/// Assembles the [`Shape`] of `T` one member at a time.
pub struct ShapeBuilder<T> {
    shape: Shape,
    _p: PhantomData<fn() -> T>,
}

impl<T: Any> ShapeBuilder<T> {
    /// A readable and writable field.
    pub fn field<V>(self, name: &str, get: fn(&T) -> &V, set: fn(&mut T) -> &mut V) -> Self
    where
        V: Clone + Into<Value> + FromValue + 'static,
    {
        self.push(
            name,
            MemberKind::Value,
            Some(Arc::new(FieldGetter::new(get))),
            Some(Arc::new(FieldSetter::new(set))),
        )
    }

    /// A field that can be read but is never written by a mapping.
    pub fn read_only<V>(self, name: &str, get: fn(&T) -> &V) -> Self
    where
        V: Clone + Into<Value> + 'static,
    {
        self.push(
            name,
            MemberKind::Value,
            Some(Arc::new(FieldGetter::new(get))),
            None,
        )
    }

    /// A computed member read through a method.
    pub fn method<V>(self, name: &str, call: fn(&T) -> V) -> Self
    where
        V: Into<Value> + 'static,
    {
        self.push(
            name,
            MemberKind::Value,
            Some(Arc::new(MethodGetter::new(call))),
            None,
        )
    }

    /// A member written through a method. When a member of the same name was
    /// already added, the setter is attached to it.
    pub fn setter<V>(mut self, name: &str, call: fn(&mut T, V)) -> Self
    where
        V: FromValue + 'static,
    {
        let setter: Arc<dyn Setter> = Arc::new(MethodSetter::new(call));

        match self.shape.members.get_mut(name) {
            Some(member) => {
                member.setter = Some(setter);
                self
            }
            None => self.push(name, MemberKind::Value, None, Some(setter)),
        }
    }

    /// A nested object that flattened source paths can step into.
    pub fn nested<U: Reflect>(self, name: &str, project: fn(&T) -> Option<&U>) -> Self {
        self.push(
            name,
            MemberKind::Object(U::shape),
            Some(Arc::new(NestedGetter::new(project))),
            None,
        )
    }

    pub fn build(self) -> Shape {
        self.shape
    }

    fn push(
        mut self,
        name: &str,
        kind: MemberKind,
        getter: Option<Arc<dyn Getter>>,
        setter: Option<Arc<dyn Setter>>,
    ) -> Self {
        self.shape.members.insert(
            name.to_string(),
            Member {
                name: name.to_string(),
                words: std_util::str::words(name),
                kind,
                getter,
                setter,
            },
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Account {
        id: u64,
        owner: String,
    }

    impl Account {
        fn label(&self) -> String {
            format!("#{}", self.id)
        }

        fn set_label(&mut self, label: String) {
            self.owner = label;
        }
    }

    #[test]
    fn setter_attaches_to_existing_member() {
        let shape = Shape::builder::<Account>()
            .field("id", |a| &a.id, |a| &mut a.id)
            .method("label", Account::label)
            .setter("label", Account::set_label)
            .build();

        assert_eq!(shape.members().len(), 2);

        let label = shape.member("label").unwrap();
        assert!(label.is_readable());
        assert!(label.is_writable());
        assert_eq!(label.words(), ["label"]);
    }

    #[test]
    fn find_matches_on_words() {
        let shape = Shape::builder::<Account>()
            .read_only("ownerName", |a| &a.owner)
            .build();

        let words = std_util::str::words("owner_name");
        let member = shape.find(&words).unwrap();
        assert_eq!(member.name(), "ownerName");
        assert!(!member.is_writable());
        assert!(!member.is_object());
    }
}
