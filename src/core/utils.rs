use std::collections::BTreeSet;
use std::rc::Rc;

/*-------------------------------------------------------------------------------------------------
  Utilities
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Work with Reference Counted String Slices
--------------------------------------------------------------------------------------*/

/// Return the shared copy of `value` from `set`, inserting it first if it is new.
pub fn intern_rc_str(value: &str, set: &mut BTreeSet<Rc<str>>) -> Rc<str> {
    if let Some(item) = set.get(value) {
        return Rc::clone(item);
    }
    let item: Rc<str> = Rc::from(value);
    set.insert(Rc::clone(&item));
    item
}
