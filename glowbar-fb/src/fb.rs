/// Linux framebuffer output: open the fbdev node, query geometry, mmap, blit.

use std::fs::{File, OpenOptions};
use std::num::NonZeroUsize;
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::ptr::NonNull;

use nix::sys::mman::{mmap, munmap, MapFlags, ProtFlags};
use tracing::info;

use crate::error::{HostError, Result};

/// Framebuffer screen info (from FBIOGET_VSCREENINFO / FBIOGET_FSCREENINFO).
#[derive(Debug, Clone)]
pub struct ScreenInfo {
    pub width: u32,
    pub height: u32,
    pub stride: u32, // bytes per line
    pub bpp: u32,    // bits per pixel
}

// Linux framebuffer ioctls
const FBIOGET_VSCREENINFO: libc::c_int = 0x4600;
const FBIOGET_FSCREENINFO: libc::c_int = 0x4602;

#[repr(C)]
#[derive(Default)]
struct FbVarScreenInfo {
    xres: u32,
    yres: u32,
    xres_virtual: u32,
    yres_virtual: u32,
    xoffset: u32,
    yoffset: u32,
    bits_per_pixel: u32,
    grayscale: u32,
    red: FbBitfield,
    green: FbBitfield,
    blue: FbBitfield,
    transp: FbBitfield,
    nonstd: u32,
    activate: u32,
    height: u32,
    width: u32,
    accel_flags: u32,
    // timing fields
    pixclock: u32,
    left_margin: u32,
    right_margin: u32,
    upper_margin: u32,
    lower_margin: u32,
    hsync_len: u32,
    vsync_len: u32,
    sync: u32,
    vmode: u32,
    rotate: u32,
    colorspace: u32,
    reserved: [u32; 4],
}

#[repr(C)]
#[derive(Default)]
struct FbBitfield {
    offset: u32,
    length: u32,
    msb_right: u32,
}

#[repr(C)]
#[derive(Default)]
struct FbFixScreenInfo {
    id: [u8; 16],
    smem_start: libc::c_ulong,
    smem_len: u32,
    fb_type: u32,
    type_aux: u32,
    visual: u32,
    xpanstep: u16,
    ypanstep: u16,
    ywrapstep: u16,
    line_length: u32,
    mmio_start: libc::c_ulong,
    mmio_len: u32,
    accel: u32,
    capabilities: u16,
    reserved: [u16; 2],
}

pub struct Framebuffer {
    _file: File,
    fb_ptr: *mut u8,
    fb_len: usize,
    pub info: ScreenInfo,
    /// Last frame written, in framebuffer byte order.
    prev_frame: Vec<u8>,
    scratch: Vec<u8>,
}

impl Framebuffer {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| HostError::Open {
                path: path.display().to_string(),
                source,
            })?;

        let fd = file.as_raw_fd();

        let mut vinfo = FbVarScreenInfo::default();
        let ret = unsafe { libc::ioctl(fd, FBIOGET_VSCREENINFO as _, &mut vinfo as *mut _) };
        if ret < 0 {
            return Err(HostError::Ioctl {
                request: "FBIOGET_VSCREENINFO",
                source: std::io::Error::last_os_error(),
            });
        }

        let mut finfo = FbFixScreenInfo::default();
        let ret = unsafe { libc::ioctl(fd, FBIOGET_FSCREENINFO as _, &mut finfo as *mut _) };
        if ret < 0 {
            return Err(HostError::Ioctl {
                request: "FBIOGET_FSCREENINFO",
                source: std::io::Error::last_os_error(),
            });
        }

        let info = ScreenInfo {
            width: vinfo.xres,
            height: vinfo.yres,
            stride: finfo.line_length,
            bpp: vinfo.bits_per_pixel,
        };
        if info.bpp != 32 {
            return Err(HostError::UnsupportedDepth(info.bpp));
        }

        let fb_len = (finfo.line_length * vinfo.yres) as usize;
        let len = NonZeroUsize::new(fb_len).ok_or(HostError::EmptyFramebuffer)?;

        let fb_nonnull = unsafe {
            mmap(
                None,
                len,
                ProtFlags::PROT_READ | ProtFlags::PROT_WRITE,
                MapFlags::MAP_SHARED,
                &file,
                0,
            )?
        };
        let fb_ptr = fb_nonnull.as_ptr() as *mut u8;

        info!(
            path = %path.display(),
            width = info.width,
            height = info.height,
            bpp = info.bpp,
            stride = info.stride,
            "framebuffer opened"
        );

        Ok(Self {
            _file: file,
            fb_ptr,
            fb_len,
            info,
            // init different so the first frame is written
            prev_frame: vec![0xFF; fb_len],
            scratch: vec![0; fb_len],
        })
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    /// Blit a tightly packed RGBA frame (`width * 4` bytes per row).
    /// Skips the write when the frame is unchanged.
    pub fn present(&mut self, rgba: &[u8]) {
        let stride = self.info.stride as usize;
        let row_bytes = (self.info.width as usize * 4).min(stride);
        swizzle_rows(rgba, &mut self.scratch, self.info.width as usize * 4, stride, row_bytes);

        if self.scratch == self.prev_frame {
            return;
        }

        let dst = unsafe { std::slice::from_raw_parts_mut(self.fb_ptr, self.fb_len) };
        dst.copy_from_slice(&self.scratch);
        std::mem::swap(&mut self.prev_frame, &mut self.scratch);
    }
}

/// RGBA rows → BGRA rows at the framebuffer stride.
fn swizzle_rows(src: &[u8], dst: &mut [u8], src_stride: usize, dst_stride: usize, row_bytes: usize) {
    if src_stride == 0 || dst_stride == 0 {
        return;
    }
    for (src_row, dst_row) in src.chunks(src_stride).zip(dst.chunks_mut(dst_stride)) {
        let n = row_bytes.min(src_row.len()).min(dst_row.len());
        for (s, d) in src_row[..n].chunks_exact(4).zip(dst_row[..n].chunks_exact_mut(4)) {
            d[0] = s[2]; // B
            d[1] = s[1]; // G
            d[2] = s[0]; // R
            d[3] = s[3]; // A
        }
    }
}

impl Drop for Framebuffer {
    fn drop(&mut self) {
        if self.fb_len > 0 {
            if let Some(nn) = NonNull::new(self.fb_ptr as *mut libc::c_void) {
                unsafe {
                    let _ = munmap(nn, self.fb_len);
                }
            }
        }
    }
}
