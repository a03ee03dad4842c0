//! Output plumbing shared by commands

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter feeding a minus pager
///
/// Commands write to a `Box<dyn Write>`; on a terminal that box holds this
/// adapter and the collected text is paged once the command returns.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
