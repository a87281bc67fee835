// Copyright 2025 The Axvisor Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{
    core_dvfs::{CoreDvfsEntry, core_dvfs},
    selector::ANY,
};

/// Core rail voltage ladder in mV; core clock ladders are indexed by it.
pub static CORE_MILLIVOLTS: [i32; 15] = [
    800, 825, 850, 875, 900, 925, 950, 975, 1000, 1025, 1050, 1062, 1075, 1100, 1125,
];

#[rustfmt::skip]
pub static CORE_DVFS_TABLE: [CoreDvfsEntry; 120] = [
    // soc speedo 0
    core_dvfs!("emc", 0, 0, true, [      1,       1,       1,       1,       1,       1,       1,       1, 1200000, 1200000, 1200000, 1200000, 1200000, 1200000, 1200000]),

    core_dvfs!("vic03", 0, 0, true, [ 140800,  140800,  268800,  332800,  371200,  409600,  435200,  473600,  499200,  537600,  563200,  563200,  588800,  601600,  627200]),
    core_dvfs!("nvjpg", 0, 0, true, [ 140800,  140800,  268800,  332800,  371200,  409600,  435200,  473600,  499200,  537600,  563200,  563200,  588800,  601600,  627200]),
    core_dvfs!("se", 0, 0, true, [ 140800,  140800,  268800,  332800,  371200,  409600,  435200,  473600,  499200,  537600,  563200,  563200,  588800,  601600,  627200]),
    core_dvfs!("tsecb", 0, 0, true, [ 140800,  140800,  268800,  332800,  371200,  409600,  435200,  473600,  499200,  537600,  563200,  563200,  588800,  601600,  627200]),
    core_dvfs!("cbus", 0, 0, true, [ 217600,  217600,  307200,  307200,  371200,  435200,  499200,  550400,  614400,  678400,  742400,  742400,  793600,  793600,  793600]),
    core_dvfs!("c2bus", 0, 0, true, [ 140800,  140800,  268800,  332800,  371200,  409600,  435200,  473600,  499200,  537600,  563200,  563200,  588800,  601600,  627200]),

    core_dvfs!("nvenc", 0, 0, true, [ 192000,  192000,  345600,  396800,  435200,  473600,  512000,  563200,  601600,  627200,  652800,  652800,  678400,  691200,  716800]),
    core_dvfs!("nvdec", 0, 0, true, [ 192000,  192000,  345600,  396800,  435200,  473600,  512000,  563200,  601600,  627200,  652800,  652800,  678400,  691200,  716800]),
    core_dvfs!("c3bus", 0, 0, true, [ 192000,  192000,  345600,  396800,  435200,  473600,  512000,  563200,  601600,  627200,  652800,  652800,  678400,  691200,  716800]),

    core_dvfs!("vi", 0, 0, true, [      1,       1,       1,  307200,  371200,  435200,  499200,  550400,  614400,  678400,  742400,  742400,  793600,  793600,  793600]),
    core_dvfs!("isp", 0, 0, true, [      1,       1,       1,  307200,  371200,  435200,  499200,  550400,  614400,  678400,  742400,  742400,  793600,  793600,  793600]),

    core_dvfs!("ape", 0, 0, true, [ 140800,  140800,  230400,  268800,  307200,  345600,  384000,  448000,  486400,  499200,  499200,  499200,  499200,  499200,  499200]),

    core_dvfs!("sbus", 0, 0, false, [ 115200,  115200,  179200,  217600,  243200,  268800,  294400,  320000,  345600,  358400,  371200,  371200,  384000,  408000,  408000]),
    core_dvfs!("host1x", 0, 0, true, [  81600,   81600,  140800,  153600,  166400,  192000,  230400,  281600,  320000,  345600,  371200,  371200,  384000,  408000,  408000]),
    core_dvfs!("tsec", 0, 0, true, [ 217600,  217600,  384000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000]),
    core_dvfs!("mselect", 0, 0, true, [ 204000,  204000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000]),

    core_dvfs!("disp1", 0, 0, false, [ 153600,  153600,  332800,  371200,  409600,  422400,  460800,  499200,  537600,  576000,  601600,  601600,  640000,  665600,  665600]),
    core_dvfs!("disp2", 0, 0, false, [ 153600,  153600,  332800,  371200,  409600,  422400,  460800,  499200,  537600,  576000,  601600,  601600,  640000,  665600,  665600]),

    core_dvfs!("emc", 0, 1, true, [      1,       1,       1,       1,       1,       1,       1,       1, 1200000, 1200000, 1200000, 1200000, 1200000, 1200000, 1200000]),

    core_dvfs!("vic03", 0, 1, true, [ 192000,  192000,  307200,  345600,  409600,  486400,  524800,  550400,  576000,  588800,  614400,  614400,  627200,  627200,  627200]),
    core_dvfs!("nvjpg", 0, 1, true, [ 192000,  192000,  307200,  345600,  409600,  486400,  524800,  550400,  576000,  588800,  614400,  614400,  627200,  627200,  627200]),
    core_dvfs!("se", 0, 1, true, [ 192000,  192000,  307200,  345600,  409600,  486400,  524800,  550400,  576000,  588800,  614400,  614400,  627200,  627200,  627200]),
    core_dvfs!("tsecb", 0, 1, true, [ 192000,  192000,  307200,  345600,  409600,  486400,  524800,  550400,  576000,  588800,  614400,  614400,  627200,  627200,  627200]),
    core_dvfs!("cbus", 0, 1, true, [ 268800,  268800,  473600,  473600,  576000,  588800,  678400,  691200,  691200,  691200,  793600,  793600,  793600,  793600,  793600]),
    core_dvfs!("c2bus", 0, 1, true, [ 192000,  192000,  307200,  345600,  409600,  486400,  524800,  550400,  576000,  588800,  614400,  614400,  627200,  627200,  627200]),

    core_dvfs!("nvenc", 0, 1, true, [ 268800,  268800,  384000,  448000,  486400,  550400,  576000,  614400,  652800,  678400,  691200,  691200,  716800,  716800,  716800]),
    core_dvfs!("nvdec", 0, 1, true, [ 268800,  268800,  384000,  448000,  486400,  550400,  576000,  614400,  652800,  678400,  691200,  691200,  716800,  716800,  716800]),
    core_dvfs!("c3bus", 0, 1, true, [ 268800,  268800,  384000,  448000,  486400,  550400,  576000,  614400,  652800,  678400,  691200,  691200,  716800,  716800,  716800]),

    core_dvfs!("vi", 0, 1, true, [      1,       1,       1,  473600,  576000,  588800,  678400,  691200,  691200,  691200,  793600,  793600,  793600,  793600,  793600]),
    core_dvfs!("isp", 0, 1, true, [      1,       1,       1,  473600,  576000,  588800,  678400,  691200,  691200,  691200,  793600,  793600,  793600,  793600,  793600]),

    core_dvfs!("ape", 0, 1, true, [ 179200,  179200,  307200,  345600,  371200,  409600,  422400,  460800,  499200,  499200,  499200,  499200,  499200,  499200,  499200]),

    core_dvfs!("sbus", 0, 1, false, [ 140800,  140800,  230400,  256000,  281600,  307200,  332800,  358400,  371200,  408000,  408000,  408000,  408000,  408000,  408000]),
    core_dvfs!("host1x", 0, 1, true, [  81600,   81600,  153600,  179200,  192000,  217600,  345600,  358400,  384000,  408000,  408000,  408000,  408000,  408000,  408000]),
    core_dvfs!("tsec", 0, 1, true, [ 268800,  268800,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000]),
    core_dvfs!("mselect", 0, 1, true, [ 204000,  204000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000]),

    core_dvfs!("disp1", 0, 1, false, [ 243200,  243200,  422400,  460800,  499200,  524800,  563200,  576000,  601600,  640000,  665600,  665600,  665600,  665600,  665600]),
    core_dvfs!("disp2", 0, 1, false, [ 243200,  243200,  422400,  460800,  499200,  524800,  563200,  576000,  601600,  640000,  665600,  665600,  665600,  665600,  665600]),

    core_dvfs!("emc", 0, 2, true, [      1,       1,       1,       1,       1,       1,       1,       1, 1200000, 1200000, 1200000, 1200000, 1200000, 1200000, 1200000]),

    core_dvfs!("vic03", 0, 2, true, [ 230400,  230400,  371200,  448000,  499200,  563200,  627200,  627200,  627200,  627200,  627200,  627200,  627200,  627200,  627200]),
    core_dvfs!("nvjpg", 0, 2, true, [ 230400,  230400,  371200,  448000,  499200,  563200,  627200,  627200,  627200,  627200,  627200,  627200,  627200,  627200,  627200]),
    core_dvfs!("se", 0, 2, true, [ 230400,  230400,  371200,  448000,  499200,  563200,  627200,  627200,  627200,  627200,  627200,  627200,  627200,  627200,  627200]),
    core_dvfs!("tsecb", 0, 2, true, [ 230400,  230400,  371200,  448000,  499200,  563200,  627200,  627200,  627200,  627200,  627200,  627200,  627200,  627200,  627200]),
    core_dvfs!("cbus", 0, 2, true, [ 384000,  384000,  588800,  678400,  691200,  691200,  768000,  793600,  793600,  793600,  793600,  793600,  793600,  793600,  793600]),
    core_dvfs!("c2bus", 0, 2, true, [ 230400,  230400,  371200,  448000,  499200,  563200,  627200,  627200,  627200,  627200,  627200,  627200,  627200,  627200,  627200]),

    core_dvfs!("nvenc", 0, 2, true, [ 307200,  307200,  486400,  563200,  614400,  640000,  652800,  678400,  716800,  716800,  716800,  716800,  716800,  716800,  716800]),
    core_dvfs!("nvdec", 0, 2, true, [ 307200,  307200,  486400,  563200,  614400,  640000,  652800,  678400,  716800,  716800,  716800,  716800,  716800,  716800,  716800]),
    core_dvfs!("c3bus", 0, 2, true, [ 307200,  307200,  486400,  563200,  614400,  640000,  652800,  678400,  716800,  716800,  716800,  716800,  716800,  716800,  716800]),

    core_dvfs!("vi", 0, 2, true, [      1,       1,  588800,  678400,  691200,  691200,  768000,  793600,  793600,  793600,  793600,  793600,  793600,  793600,  793600]),
    core_dvfs!("isp", 0, 2, true, [      1,       1,  588800,  678400,  691200,  691200,  768000,  793600,  793600,  793600,  793600,  793600,  793600,  793600,  793600]),

    core_dvfs!("ape", 0, 2, true, [ 230400,  230400,  358400,  396800,  422400,  486400,  499200,  499200,  499200,  499200,  499200,  499200,  499200,  499200,  499200]),

    core_dvfs!("sbus", 0, 2, false, [ 204800,  204800,  307200,  332800,  371200,  384000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000]),
    core_dvfs!("host1x", 0, 2, true, [ 128000,  128000,  217600,  345600,  384000,  384000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000]),
    core_dvfs!("tsec", 0, 2, true, [ 345600,  345600,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000]),
    core_dvfs!("mselect", 0, 2, true, [ 204000,  204000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000,  408000]),

    core_dvfs!("disp1", 0, 2, false, [ 345600,  345600,  486400,  524800,  563200,  576000,  627200,  640000,  665600,  665600,  665600,  665600,  665600,  665600,  665600]),
    core_dvfs!("disp2", 0, 2, false, [ 345600,  345600,  486400,  524800,  563200,  576000,  627200,  640000,  665600,  665600,  665600,  665600,  665600,  665600,  665600]),

    core_dvfs!("pll_a", 0, ANY, true, [1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000]),
    core_dvfs!("pll_c", 0, ANY, true, [1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000]),
    core_dvfs!("pll_c2", 0, ANY, true, [1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000]),
    core_dvfs!("pll_c3", 0, ANY, true, [1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000]),
    core_dvfs!("pll_c4_out0", 0, ANY, true, [1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000]),
    core_dvfs!("pll_d_out0", 0, ANY, true, [1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000]),
    core_dvfs!("pll_d2", 0, ANY, true, [1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000]),
    core_dvfs!("pll_dp", 0, ANY, true, [1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000, 1130000]),

    // all speedos
    core_dvfs!("csi", ANY, ANY, true, [ 750000,  750000,  750000,  750000,  750000,  750000,  750000,  750000,  750000,  750000,  750000,  750000,  750000,  750000,  750000]),
    core_dvfs!("cilab", ANY, ANY, true, [ 102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000]),
    core_dvfs!("cilcd", ANY, ANY, true, [ 102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000]),
    core_dvfs!("cile", ANY, ANY, true, [ 102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000]),

    core_dvfs!("dsia", ANY, ANY, true, [ 500000,  500000,  500000,  500000,  750000,  750000,  750000,  750000,  750000,  750000,  750000,  750000,  750000,  750000,  750000]),
    core_dvfs!("dsib", ANY, ANY, true, [ 500000,  500000,  500000,  500000,  750000,  750000,  750000,  750000,  750000,  750000,  750000,  750000,  750000,  750000,  750000]),

    core_dvfs!("dsialp", ANY, ANY, true, [ 102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000]),
    core_dvfs!("dsiblp", ANY, ANY, true, [ 102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000]),

    core_dvfs!("sor0", ANY, ANY, true, [ 162000,  162000,  270000,  270000,  270000,  540000,  540000,  540000,  540000,  540000,  540000,  540000,  540000,  540000,  540000]),
    core_dvfs!("sor1", ANY, ANY, true, [ 148500,  148500,  297000,  297000,  297000,  297000,  297000,  594000,  594000,  594000,  594000,  594000,  594000,  594000,  594000]),

    core_dvfs!("i2s0", ANY, ANY, true, [  24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576]),
    core_dvfs!("i2s1", ANY, ANY, true, [  24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576]),
    core_dvfs!("i2s2", ANY, ANY, true, [  24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576]),
    core_dvfs!("i2s3", ANY, ANY, true, [  24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576]),
    core_dvfs!("i2s4", ANY, ANY, true, [  24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576,   24576]),

    core_dvfs!("d_audio", ANY, ANY, true, [  49152,   49152,   98304,   98304,   98304,   98304,   98304,   98304,   98304,   98304,   98304,   98304,   98304,   98304,   98304]),
    core_dvfs!("spdif_out", ANY, ANY, true, [  24576,   24576,   24576,   24576,   24576,   24576,   24728,   24728,   24728,   24728,   24728,   24728,   24728,   24728,   24728]),
    core_dvfs!("dmic1", ANY, ANY, true, [  12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190]),
    core_dvfs!("dmic2", ANY, ANY, true, [  12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190]),
    core_dvfs!("dmic3", ANY, ANY, true, [  12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190,   12190]),

    core_dvfs!("hda", ANY, ANY, true, [  51000,   51000,   51000,   51000,   51000,   51000,   51000,   51000,   51000,   51000,   51000,   51000,   51000,   51000,   51000]),
    core_dvfs!("hda2codec_2x", ANY, ANY, true, [  48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000]),

    core_dvfs!("sdmmc2", ANY, ANY, true, [      1,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000]),
    core_dvfs!("sdmmc4", ANY, ANY, true, [      1,  200000,  266000,  266000,  266000,  266000,  266000,  266000,  266000,  266000,  266000,  266000,  266000,  266000,  266000]),
    core_dvfs!("sdmmc2_ddr", ANY, ANY, true, [ 102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000]),
    core_dvfs!("sdmmc4_ddr", ANY, ANY, true, [ 102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000]),

    core_dvfs!("sdmmc1", ANY, ANY, true, [ 136000,  136000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000]),
    core_dvfs!("sdmmc3", ANY, ANY, true, [ 136000,  136000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000]),

    core_dvfs!("sdmmc1_ddr", ANY, ANY, true, [  96000,   96000,   96000,   96000,   96000,   96000,   96000,   96000,   96000,   96000,   96000,   96000,   96000,   96000,   96000]),
    core_dvfs!("sdmmc3_ddr", ANY, ANY, true, [  96000,   96000,   96000,   96000,   96000,   96000,   96000,   96000,   96000,   96000,   96000,   96000,   96000,   96000,   96000]),

    core_dvfs!("xusb_falcon_src", ANY, ANY, true, [      1,       1,  336000,  336000,  336000,  336000,  336000,  336000,  336000,  336000,  336000,  336000,  336000,  336000,  336000]),
    core_dvfs!("xusb_host_src", ANY, ANY, true, [      1,       1,  112000,  112000,  112000,  112000,  112000,  112000,  112000,  112000,  112000,  112000,  112000,  112000,  112000]),
    core_dvfs!("xusb_dev_src", ANY, ANY, true, [      1,       1,  112000,  112000,  112000,  112000,  112000,  112000,  112000,  112000,  112000,  112000,  112000,  112000,  112000]),
    core_dvfs!("xusb_ssp_src", ANY, ANY, true, [      1,       1,  120000,  120000,  120000,  120000,  120000,  120000,  120000,  120000,  120000,  120000,  120000,  120000,  120000]),
    core_dvfs!("xusb_fs_src", ANY, ANY, true, [      1,       1,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000]),
    core_dvfs!("xusb_hs_src", ANY, ANY, true, [      1,       1,  120000,  120000,  120000,  120000,  120000,  120000,  120000,  120000,  120000,  120000,  120000,  120000,  120000]),
    core_dvfs!("usbd", ANY, ANY, true, [ 480000,  480000,  480000,  480000,  480000,  480000,  480000,  480000,  480000,  480000,  480000,  480000,  480000,  480000,  480000]),
    core_dvfs!("usb2", ANY, ANY, true, [ 480000,  480000,  480000,  480000,  480000,  480000,  480000,  480000,  480000,  480000,  480000,  480000,  480000,  480000,  480000]),

    core_dvfs!("sata", ANY, ANY, true, [      1,       1,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000,  102000]),
    core_dvfs!("sata_oob", ANY, ANY, true, [      1,       1,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000,  204000]),
    core_dvfs!("pcie", ANY, ANY, true, [      1,       1,  500000,  500000,  500000,  500000,  500000,  500000,  500000,  500000,  500000,  500000,  500000,  500000,  500000]),

    core_dvfs!("i2c1", ANY, ANY, true, [ 136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000]),
    core_dvfs!("i2c2", ANY, ANY, true, [ 136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000]),
    core_dvfs!("i2c3", ANY, ANY, true, [ 136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000]),
    core_dvfs!("i2c4", ANY, ANY, true, [ 136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000]),
    core_dvfs!("i2c5", ANY, ANY, true, [ 136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000]),
    core_dvfs!("i2c6", ANY, ANY, true, [ 136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000]),
    core_dvfs!("vii2c", ANY, ANY, true, [ 136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000]),

    core_dvfs!("pwm", ANY, ANY, true, [  48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000,   48000]),

    core_dvfs!("soc_therm", ANY, ANY, true, [ 136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000,  136000]),
    core_dvfs!("tsensor", ANY, ANY, true, [  19200,   19200,   19200,   19200,   19200,   19200,   19200,   19200,   19200,   19200,   19200,   19200,   19200,   19200,   19200]),

    core_dvfs!("sbc1", ANY, ANY, true, [  12000,   35000,   50000,   50000,   65000,   65000,   65000,   65000,   65000,   65000,   65000,   65000,   65000,   65000,   65000]),
    core_dvfs!("sbc2", ANY, ANY, true, [  12000,   35000,   50000,   50000,   65000,   65000,   65000,   65000,   65000,   65000,   65000,   65000,   65000,   65000,   65000]),
    core_dvfs!("sbc3", ANY, ANY, true, [  12000,   35000,   50000,   50000,   65000,   65000,   65000,   65000,   65000,   65000,   65000,   65000,   65000,   65000,   65000]),
    core_dvfs!("sbc4", ANY, ANY, true, [  12000,   35000,   50000,   50000,   65000,   65000,   65000,   65000,   65000,   65000,   65000,   65000,   65000,   65000,   65000]),
];

pub static QSPI_SDR_DVFS: CoreDvfsEntry = core_dvfs!("qspi", ANY, ANY, true, [
    81600, 81600, 116600, 116600, 116600, 116600, 116600, 116600,
    116600, 116600, 116600, 116600, 116600, 116600, 116600,
]);

pub static QSPI_DDR_DVFS: CoreDvfsEntry = core_dvfs!("qspi", ANY, ANY, true, [
    81600, 81600, 81600, 81600, 81600, 81600, 81600, 81600,
    81600, 81600, 81600, 81600, 81600, 81600, 81600,
]);

/// Alternative `sor1` ladder for DisplayPort.
pub static SOR1_DP_DVFS: CoreDvfsEntry = core_dvfs!("sor1", ANY, ANY, true, [
    162000, 162000, 270000, 270000, 270000, 540000, 540000, 540000,
    540000, 540000, 540000, 540000, 540000, 540000, 540000,
]);
