// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Combining register arrays.
//!
//! Each register holds a maximum, and the maximum of maxima is the maximum of
//! everything, so the element-wise max of two register arrays is exactly the
//! register array of the union of their items. Sketches built on different
//! machines (or days) can be combined without revisiting the items.
//!
//! Both arrays must come from the same precision and hash seed. The length is
//! checked; the seed cannot be and is the caller's responsibility.

use crate::error::Error;
use crate::error::ErrorKind;

/// Element-wise max of two register arrays of the same length.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidArgument`] if the lengths differ.
///
/// # Examples
///
/// ```
/// use hllsim::hll::merge_registers;
///
/// let merged = merge_registers(&[3, 5, 2, 7], &[4, 3, 5, 2]).unwrap();
/// assert_eq!(merged, vec![4, 5, 5, 7]);
/// assert!(merge_registers(&[1, 2], &[1, 2, 3]).is_err());
/// ```
pub fn merge_registers(a: &[u8], b: &[u8]) -> Result<Vec<u8>, Error> {
    check_same_len(a, b)?;
    Ok(a.iter().zip(b).map(|(&x, &y)| x.max(y)).collect())
}

/// Merge `src` into `dst` in place.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidArgument`] if the lengths differ; `dst` is left
/// untouched.
pub fn merge_into(dst: &mut [u8], src: &[u8]) -> Result<(), Error> {
    check_same_len(dst, src)?;
    for (d, &s) in dst.iter_mut().zip(src) {
        if s > *d {
            *d = s;
        }
    }
    Ok(())
}

/// Fold any number of register arrays into one. Returns `None` when there is
/// nothing to merge.
pub fn merge_all<'a, I>(arrays: I) -> Result<Option<Vec<u8>>, Error>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut arrays = arrays.into_iter();
    let Some(first) = arrays.next() else {
        return Ok(None);
    };
    let mut merged = first.to_vec();
    for array in arrays {
        merge_into(&mut merged, array)?;
    }
    Ok(Some(merged))
}

fn check_same_len(a: &[u8], b: &[u8]) -> Result<(), Error> {
    if a.len() != b.len() {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            "cannot merge register arrays of different sizes",
        )
        .with_context("left", a.len())
        .with_context("right", b.len()));
    }
    Ok(())
}
