/// Type of the value behind a [`FieldHandle`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Integer,
    Float,
    Text,
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// A value the host can only show, as its debug representation
    Other(String),
}

/// A host-managed editable field, either of a single object or of a multi-selection.
///
/// Handles are borrowed for one draw call and never retained.
pub trait FieldHandle {
    fn kind(&self) -> FieldKind;

    /// Representative value. For a multi-selection this is the first selected object's value.
    fn value(&self) -> FieldValue;

    /// Writes `value` to every object behind the handle. Returns false, writing nothing, when
    /// the value does not fit the field's type.
    fn set_value(&mut self, value: FieldValue) -> bool;

    /// True when the objects behind the handle disagree on the value
    fn has_multiple_different_values(&self) -> bool;

    fn bool_value(&self) -> Option<bool> {
        match self.value() {
            FieldValue::Bool(b) => Some(b),
            _ => None,
        }
    }

    fn set_bool_value(&mut self, value: bool) -> bool {
        self.set_value(FieldValue::Bool(value))
    }
}

/// Conversion between a concrete field type and [`FieldValue`]
pub trait FieldData: Clone + PartialEq {
    const KIND: FieldKind;

    fn to_field_value(&self) -> FieldValue;
    fn from_field_value(value: FieldValue) -> Option<Self>;
}

impl FieldData for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Bool(*self)
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl FieldData for String {
    const KIND: FieldKind = FieldKind::Text;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! integer_field_data {
    ($($t: ty),*) => {$(
        impl FieldData for $t {
            const KIND: FieldKind = FieldKind::Integer;

            /// Values outside of `i64` can only be shown, not edited.
            fn to_field_value(&self) -> FieldValue {
                match i64::try_from(*self) {
                    Ok(v) => FieldValue::Integer(v),
                    Err(_) => FieldValue::Other(self.to_string()),
                }
            }

            fn from_field_value(value: FieldValue) -> Option<Self> {
                match value {
                    FieldValue::Integer(v) => <$t>::try_from(v).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

integer_field_data!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

macro_rules! float_field_data {
    ($($t: ty),*) => {$(
        impl FieldData for $t {
            const KIND: FieldKind = FieldKind::Float;

            fn to_field_value(&self) -> FieldValue {
                FieldValue::Float(*self as f64)
            }

            fn from_field_value(value: FieldValue) -> Option<Self> {
                match value {
                    FieldValue::Float(v) => Some(v as $t),
                    _ => None,
                }
            }
        }
    )*};
}

float_field_data!(f32, f64);

/// [`FieldHandle`] over the same field of several selected objects.
pub struct MultiField<'a, 'b, T> {
    data: &'a mut [&'b mut T],
}

impl<'a, 'b, T: FieldData> MultiField<'a, 'b, T> {
    pub fn new(data: &'a mut [&'b mut T]) -> Self {
        Self { data }
    }

    fn get_same_or_none(&self) -> Option<&T> {
        let first = self.data.first()?;
        if self.data.iter().all(|d| **d == **first) {
            Some(first)
        } else {
            None
        }
    }
}

impl<'a, 'b, T: FieldData> FieldHandle for MultiField<'a, 'b, T> {
    fn kind(&self) -> FieldKind {
        T::KIND
    }

    fn value(&self) -> FieldValue {
        match self.data.first() {
            Some(d) => d.to_field_value(),
            None => FieldValue::Other(String::new()),
        }
    }

    fn set_value(&mut self, value: FieldValue) -> bool {
        let Some(v) = T::from_field_value(value) else {
            return false;
        };
        for d in self.data.iter_mut() {
            **d = v.clone();
        }
        true
    }

    fn has_multiple_different_values(&self) -> bool {
        !self.data.is_empty() && self.get_same_or_none().is_none()
    }
}
