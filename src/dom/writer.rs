use crate::dom::dom_model::{Document, DomError, EventKind, NodeId};

// ============================================================================
// Native value writer
// ============================================================================

/// The platform's own value/checked accessors.
///
/// Frameworks that control inputs replace the element-level accessor with one
/// that also updates their internal tracker; a write through that override
/// makes the following `input` event look like a no-op to them. Implementors
/// of this trait must reach the underlying platform slot instead.
pub trait ValueAccessor {
    fn set_value(&self, doc: &mut Document, el: NodeId, value: &str) -> Result<(), DomError>;
    fn set_checked(&self, doc: &mut Document, el: NodeId, checked: bool) -> Result<(), DomError>;
}

/// Writes straight into the document's platform slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformAccessor;

impl ValueAccessor for PlatformAccessor {
    fn set_value(&self, doc: &mut Document, el: NodeId, value: &str) -> Result<(), DomError> {
        doc.store_platform_value(el, value)
    }

    fn set_checked(&self, doc: &mut Document, el: NodeId, checked: bool) -> Result<(), DomError> {
        doc.store_platform_checked(el, checked)
    }
}

/// Commits values through a `ValueAccessor` and fires the notifications
/// listeners expect.
#[derive(Debug, Clone, Default)]
pub struct NativeWriter<A: ValueAccessor = PlatformAccessor> {
    accessor: A,
}

impl NativeWriter<PlatformAccessor> {
    pub fn platform() -> Self {
        Self {
            accessor: PlatformAccessor,
        }
    }
}

impl<A: ValueAccessor> NativeWriter<A> {
    pub fn new(accessor: A) -> Self {
        Self { accessor }
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    /// Set the value of a text-like control or select.
    ///
    /// Selects get `change`; inputs and textareas get `input` then `change`.
    /// Selecting an option needs an exact value match; any fuzzy matching
    /// happens before this call.
    pub fn write_value(&self, doc: &mut Document, el: NodeId, value: &str) -> Result<(), DomError> {
        let tag = doc.tag(el).ok_or(DomError::UnknownNode(el))?.to_string();

        self.accessor.set_value(doc, el, value)?;

        if tag != "select" {
            doc.dispatch(el, EventKind::Input);
        }
        doc.dispatch(el, EventKind::Change);
        Ok(())
    }

    /// Check a radio (or checkbox) and fire `change`. Other radios sharing its
    /// name within the same form are unchecked.
    pub fn check(&self, doc: &mut Document, el: NodeId) -> Result<(), DomError> {
        let element = doc.element(el).ok_or(DomError::UnknownNode(el))?;

        if element.input_type().as_deref() == Some("radio") {
            if let Some(name) = element.attr("name").filter(|n| !n.is_empty()) {
                let name = name.to_string();
                let form = doc.form_of(el);
                let siblings: Vec<NodeId> = doc
                    .elements()
                    .filter(|other| {
                        *other != el
                            && doc.element(*other).is_some_and(|o| {
                                o.input_type().as_deref() == Some("radio")
                                    && o.attr("name") == Some(name.as_str())
                            })
                            && doc.form_of(*other) == form
                    })
                    .collect();

                for sibling in siblings {
                    self.accessor.set_checked(doc, sibling, false)?;
                }
            }
        }

        self.accessor.set_checked(doc, el, true)?;
        doc.dispatch(el, EventKind::Change);
        Ok(())
    }
}
