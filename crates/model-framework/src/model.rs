//! # Model Factory
//!
//! [`create_model`] produces a [`ModelType`]: a named, reusable blueprint
//! holding an ordered accessor table, an event emitter, and extension
//! registries. Invoking [`ModelType::create`] or [`ModelType::create_with`]
//! yields an [`Instance`], an independent value-holder conforming to the
//! model's accessor set.
//!
//! Both handles are cheap to clone (`Rc` inner, shared state), the same
//! shape as a cloneable client handle: events can carry the instance, and
//! plugins can keep a model handle around without lifetime gymnastics.
//!
//! # Architecture Note
//! Instances consult the model's accessor table *live* on every access.
//! Properties declared after an instance exists therefore apply to that
//! instance too, because accessors live on the shared table, never copied
//! per instance. The value table, by contrast, is allocated inside the
//! instance constructor and never shared, so two instances of the same
//! model cannot observe each other's values.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::debug;

use crate::descriptor::{PropertyDescriptor, PropertyKey};
use crate::error::ModelError;
use crate::events::{Emitter, Event, Topic};
use crate::property;
use crate::storage::ValueTable;
use crate::value::Value;

/// Initial attribute bag accepted at construction. Entries are assigned in
/// iteration order, which for an `IndexMap` is insertion order.
pub type Attributes = IndexMap<String, Value>;

/// Compiled getter: reads the instance's stored value.
pub(crate) type GetFn = Rc<dyn Fn(&Instance) -> Value>;
/// Compiled setter: validates, stores, and notifies.
pub(crate) type SetFn = Rc<dyn Fn(&Instance, Value) -> Result<(), ModelError>>;

/// Live getter/setter pair compiled for one declared property.
pub(crate) struct Accessor {
    pub(crate) get: GetFn,
    pub(crate) set: SetFn,
}

/// Extension function attached at model scope.
pub type ModelExtensionFn = Rc<dyn Fn(&ModelType, Value) -> Result<Value, ModelError>>;
/// Extension function attached at instance scope.
pub type InstanceExtensionFn = Rc<dyn Fn(&Instance, Value) -> Result<Value, ModelError>>;

struct ModelInner {
    name: String,
    accessors: RefCell<IndexMap<String, Accessor>>,
    descriptors: RefCell<Vec<PropertyDescriptor>>,
    emitter: Emitter,
    model_extensions: RefCell<HashMap<String, ModelExtensionFn>>,
    instance_extensions: RefCell<HashMap<String, InstanceExtensionFn>>,
}

/// A named, reusable blueprint for a class of instances.
///
/// Created once by [`create_model`] or [`ModelType::new`]; properties may
/// be added any number of times afterward; lives for the process lifetime,
/// like a type definition.
#[derive(Clone)]
pub struct ModelType {
    inner: Rc<ModelInner>,
}

/// Create a model type with an initial property list. Bare names and full
/// descriptors mix freely.
///
/// ```
/// use model_framework::{create_model, PropertyDescriptor, PropertyKey, PropertyType};
///
/// let user = create_model(
///     "User",
///     [
///         PropertyKey::from("name"),
///         PropertyDescriptor::new("age").typed(PropertyType::Number).into(),
///     ],
/// )
/// .unwrap();
/// assert_eq!(user.property_names(), vec!["name", "age"]);
/// ```
pub fn create_model<K: Into<PropertyKey>>(
    name: impl Into<String>,
    properties: impl IntoIterator<Item = K>,
) -> Result<ModelType, ModelError> {
    let model = ModelType::new(name)?;
    model.set_properties(properties)?;
    Ok(model)
}

impl ModelType {
    /// Create an empty model type. The name must be non-empty; it is set
    /// once and never renamed.
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::MissingModelName);
        }
        debug!(model = %name, "Model created");
        Ok(Self {
            inner: Rc::new(ModelInner {
                name,
                accessors: RefCell::new(IndexMap::new()),
                descriptors: RefCell::new(Vec::new()),
                emitter: Emitter::new(),
                model_extensions: RefCell::new(HashMap::new()),
                instance_extensions: RefCell::new(HashMap::new()),
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Declared property names, in declaration order.
    pub fn property_names(&self) -> Vec<String> {
        self.inner.accessors.borrow().keys().cloned().collect()
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.inner.accessors.borrow().contains_key(name)
    }

    /// Every descriptor ever registered, in registration order. The list
    /// accumulates over the model's lifetime; re-registrations append.
    pub fn descriptors(&self) -> Vec<PropertyDescriptor> {
        self.inner.descriptors.borrow().clone()
    }

    /// Declare one property. Returns `self` for chaining:
    ///
    /// ```
    /// use model_framework::ModelType;
    ///
    /// # fn main() -> Result<(), model_framework::ModelError> {
    /// let user = ModelType::new("User")?;
    /// user.set_property("name")?.set_property("email")?;
    /// assert!(user.has_property("email"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn set_property(&self, key: impl Into<PropertyKey>) -> Result<&Self, ModelError> {
        property::install_property(self, key.into())?;
        Ok(self)
    }

    /// Declare several properties at once, in order. Returns `self` for
    /// chaining.
    pub fn set_properties<K: Into<PropertyKey>>(
        &self,
        keys: impl IntoIterator<Item = K>,
    ) -> Result<&Self, ModelError> {
        property::install_properties(self, keys.into_iter().map(Into::into))?;
        Ok(self)
    }

    /// Invoke `plugin` with this model type, synchronously. Plugins attach
    /// extensions (persistence, serialization, ...) without the core
    /// knowing their shape.
    pub fn use_plugin(&self, plugin: impl FnOnce(&Self)) -> &Self {
        plugin(self);
        self
    }

    /// Attach a named model-scope extension. Extensions are only ever
    /// added, never removed; re-using a name replaces the function.
    pub fn extend(
        &self,
        name: impl Into<String>,
        f: impl Fn(&Self, Value) -> Result<Value, ModelError> + 'static,
    ) -> &Self {
        self.inner
            .model_extensions
            .borrow_mut()
            .insert(name.into(), Rc::new(f));
        self
    }

    /// Attach a named extension callable on every instance of this model.
    pub fn extend_instances(
        &self,
        name: impl Into<String>,
        f: impl Fn(&Instance, Value) -> Result<Value, ModelError> + 'static,
    ) -> &Self {
        self.inner
            .instance_extensions
            .borrow_mut()
            .insert(name.into(), Rc::new(f));
        self
    }

    /// Call a model-scope extension by name.
    pub fn call(&self, name: &str, arg: Value) -> Result<Value, ModelError> {
        let f = self
            .inner
            .model_extensions
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| ModelError::UnknownExtension(name.to_string()))?;
        f(self, arg)
    }

    /// Register a listener at model scope. Topics: [`Topic::Construct`],
    /// [`Topic::Change`], [`Topic::ChangeOf`].
    pub fn on(&self, topic: Topic, listener: impl Fn(&Event) + 'static) -> &Self {
        self.inner.emitter.on(topic, listener);
        self
    }

    /// Build an instance with no initial attributes. No `construct` event
    /// fires for the zero-argument form.
    pub fn create(&self) -> Instance {
        Instance::new(self.clone())
    }

    /// Build an instance, assigning every bag entry through the compiled
    /// accessor in bag iteration order, then emit `construct` at model
    /// scope with the instance and the bag.
    ///
    /// Assignment replays full validation and change notification; an
    /// invalid initial value aborts construction with the assignment's
    /// error, and `construct` does not fire.
    pub fn create_with(&self, attributes: Attributes) -> Result<Instance, ModelError> {
        let instance = Instance::new(self.clone());
        for (name, value) in &attributes {
            instance.set(name, value.clone())?;
        }
        debug!(model = %self.name(), attributes = attributes.len(), "Instance constructed");
        let event = Event::Construct {
            instance: instance.clone(),
            attributes,
        };
        self.emit(&Topic::Construct, &event);
        Ok(instance)
    }

    pub(crate) fn emit(&self, topic: &Topic, event: &Event) {
        self.inner.emitter.emit(topic, event);
    }

    pub(crate) fn register_accessor(&self, descriptor: PropertyDescriptor, accessor: Accessor) {
        let name = descriptor.name.clone();
        self.inner.descriptors.borrow_mut().push(descriptor);
        self.inner.accessors.borrow_mut().insert(name, accessor);
    }

    pub(crate) fn accessor_get(&self, name: &str) -> Option<GetFn> {
        self.inner.accessors.borrow().get(name).map(|a| a.get.clone())
    }

    pub(crate) fn accessor_set(&self, name: &str) -> Option<SetFn> {
        self.inner.accessors.borrow().get(name).map(|a| a.set.clone())
    }

    fn instance_extension(&self, name: &str) -> Option<InstanceExtensionFn> {
        self.inner.instance_extensions.borrow().get(name).cloned()
    }
}

impl fmt::Debug for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelType")
            .field("name", &self.inner.name)
            .field("properties", &self.property_names())
            .finish()
    }
}

struct InstanceInner {
    model: ModelType,
    // Allocated here, per instance. Never module- or factory-level shared
    // state.
    values: ValueTable,
    emitter: Emitter,
}

/// One value-holder conforming to exactly one [`ModelType`].
///
/// Cheap to clone; clones share the same underlying state, so the handle an
/// event listener receives is the same instance the caller holds.
#[derive(Clone)]
pub struct Instance {
    inner: Rc<InstanceInner>,
}

impl Instance {
    fn new(model: ModelType) -> Self {
        Self {
            inner: Rc::new(InstanceInner {
                model,
                values: ValueTable::new(),
                emitter: Emitter::new(),
            }),
        }
    }

    /// The model type this instance conforms to.
    pub fn model(&self) -> &ModelType {
        &self.inner.model
    }

    /// Current value of `name`, or [`Value::Null`] when unset or
    /// undeclared.
    pub fn get(&self, name: &str) -> Value {
        match self.inner.model.accessor_get(name) {
            Some(get) => get(self),
            None => Value::Null,
        }
    }

    /// Assign `value` to the declared property `name` through its compiled
    /// accessor: validation first, then storage, then change notification
    /// at both scopes. On rejection nothing is stored and nothing fires.
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<(), ModelError> {
        let set = self
            .inner
            .model
            .accessor_set(name)
            .ok_or_else(|| ModelError::UnknownProperty(name.to_string()))?;
        set(self, value.into())
    }

    /// Register a listener at instance scope. Model-scope listeners are a
    /// separate namespace; see [`ModelType::on`].
    pub fn on(&self, topic: Topic, listener: impl Fn(&Event) + 'static) -> &Self {
        self.inner.emitter.on(topic, listener);
        self
    }

    /// Call an instance-scope extension by name.
    pub fn call(&self, name: &str, arg: Value) -> Result<Value, ModelError> {
        let f = self
            .inner
            .model
            .instance_extension(name)
            .ok_or_else(|| ModelError::UnknownExtension(name.to_string()))?;
        f(self, arg)
    }

    pub(crate) fn emit(&self, topic: &Topic, event: &Event) {
        self.inner.emitter.emit(topic, event);
    }

    pub(crate) fn stored(&self, name: &str) -> Value {
        self.inner.values.get(name)
    }

    pub(crate) fn store(&self, name: &str, value: Value) {
        self.inner.values.set(name, value);
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("model", &self.inner.model.name())
            .finish_non_exhaustive()
    }
}
