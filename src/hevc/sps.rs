use std::fmt;

use log::debug;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::bits::bitslice_reader::BitSliceReader;
use crate::bits::BitReadError;

/// Default number of leading bits skipped before `sps_video_parameter_set_id`.
///
/// Covers payloads carrying a four byte prefix ahead of the SPS fields, as
/// handed over by common extraction layers. A bare NAL unit only has the
/// two byte NAL header in front, see [`SpsParseOpts`].
pub const DEFAULT_NAL_HEADER_BITS: usize = 32;

/// Options for [`SpsInfo::parse_with_opts`].
#[derive(Debug, Clone, Copy)]
pub struct SpsParseOpts {
    /// Number of leading bits to skip before the first SPS field.
    ///
    /// Use 16 when the buffer starts directly at the NAL unit header.
    pub nal_header_bits: usize,
}

impl Default for SpsParseOpts {
    fn default() -> Self {
        Self {
            nal_header_bits: DEFAULT_NAL_HEADER_BITS,
        }
    }
}

/// Stream-wide coding parameters decoded from a sequence parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SpsInfo {
    /// Picture width in pixels, after conformance window cropping.
    pub width: u32,
    /// Picture height in pixels, after conformance window cropping.
    pub height: u32,

    pub profile_space: u8,
    pub tier_flag: bool,
    pub profile_idc: u8,
    pub level_idc: u8,

    /// 0: monochrome, 1: 4:2:0, 2: 4:2:2, 3: 4:4:4
    pub chroma_format_idc: u8,

    // [8, 16]
    pub bit_depth_luma: u8,
    pub bit_depth_chroma: u8,
}

impl SpsInfo {
    /// Parses the SPS prefix fields, through the bit depths.
    ///
    /// The buffer must already be free of emulation prevention bytes.
    /// Anything following the bit depth fields is left unread.
    pub fn parse(data: &[u8]) -> Result<SpsInfo, BitReadError> {
        Self::parse_with_opts(data, &SpsParseOpts::default())
    }

    pub fn parse_with_opts(data: &[u8], opts: &SpsParseOpts) -> Result<SpsInfo, BitReadError> {
        let mut bs = BitSliceReader::new(data);

        bs.skip_n(opts.nal_header_bits)?;

        let _vps_id = bs.get_n(4)?;
        let _max_sub_layers_minus1 = bs.get_n(3)?;
        let _temporal_id_nesting_flag = bs.get()?;

        // profile_tier_level, general layer only
        let profile_space = bs.get_n(2)? as u8;
        let tier_flag = bs.get()?;
        let profile_idc = bs.get_n(5)? as u8;

        // general_profile_compatibility_flag[32]
        bs.skip_n(32)?;
        // source/constraint flags and reserved bits
        bs.skip_n(16)?;

        let level_idc = bs.get_n(8)? as u8;

        let _sps_id = bs.get_ue()?;

        let chroma_format_idc = bs.get_ue()? as u8;
        if chroma_format_idc == 3 {
            let _separate_colour_plane_flag = bs.get()?;
        }

        let pic_width_in_luma_samples = bs.get_ue()?;
        let pic_height_in_luma_samples = bs.get_ue()?;

        let conformance_window_flag = bs.get()?;

        let (width, height) = if conformance_window_flag {
            let left_offset = bs.get_ue()?;
            let right_offset = bs.get_ue()?;
            let top_offset = bs.get_ue()?;
            let bottom_offset = bs.get_ue()?;

            (
                pic_width_in_luma_samples.saturating_sub(left_offset.saturating_add(right_offset)),
                pic_height_in_luma_samples.saturating_sub(top_offset.saturating_add(bottom_offset)),
            )
        } else {
            (pic_width_in_luma_samples, pic_height_in_luma_samples)
        };

        let bit_depth_luma = (bs.get_ue()? + 8) as u8;
        let bit_depth_chroma = (bs.get_ue()? + 8) as u8;

        let info = SpsInfo {
            width,
            height,
            profile_space,
            tier_flag,
            profile_idc,
            level_idc,
            chroma_format_idc,
            bit_depth_luma,
            bit_depth_chroma,
        };

        debug!(
            "SPS: {}x{}, profile space {}, tier {}, profile idc {}, level idc {}, chroma format {}, bit depth {}/{}",
            info.width,
            info.height,
            info.profile_space,
            u8::from(info.tier_flag),
            info.profile_idc,
            info.level_idc,
            info.chroma_format_idc,
            info.bit_depth_luma,
            info.bit_depth_chroma
        );

        Ok(info)
    }
}

impl fmt::Display for SpsInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Width: {}, Height: {}", self.width, self.height)?;
        writeln!(
            f,
            "Profile Space: {}, Tier Flag: {}",
            self.profile_space, self.tier_flag
        )?;
        writeln!(
            f,
            "Profile IDC: {}, Level IDC: {}",
            self.profile_idc, self.level_idc
        )?;
        writeln!(
            f,
            "Chroma Format IDC: {}, Bit Depth Luma: {}",
            self.chroma_format_idc, self.bit_depth_luma
        )?;
        write!(f, "Bit Depth Chroma: {}", self.bit_depth_chroma)
    }
}
