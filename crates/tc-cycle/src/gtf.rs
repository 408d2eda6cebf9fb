//! Bundled geared-turbofan deck: atmosphere, gas model, component maps,
//! scalars, and geometry for a twin-spool, high-bypass engine with a fan
//! reduction gear, variable bleed valve, and variable-area fan nozzle.
//!
//! Map arrays are row-major: compressor tables are R-line rows by
//! corrected-speed columns, turbine tables are pressure-ratio rows by
//! corrected-speed columns.

use tc_components::{
    Ambient, BleedSpec, BleedValve, Burner, Compressor, CoolingPort, Duct, GasTables, Inlet,
    Nozzle, NozzleGeometry, Shaft, SolveMode, StaticCalc, Turbine,
};
use tc_core::interp::{Table1, Table2};
use tc_core::{CoreResult, Real};

use crate::engine::Engine;
use crate::error::CycleResult;

const ALT_GRID: [Real; 15] = [
    -5000.0, 0.0, 5000.0, 10000.0, 15000.0, 20000.0, 25000.0, 30000.0, 35000.0, 40000.0,
    45000.0, 50000.0, 60000.0, 70000.0, 80000.0,
];
const TS_VS_ALT: [Real; 15] = [
    536.51, 518.67, 500.84, 483.03, 465.22, 447.41, 429.62, 411.84, 394.06, 389.97, 389.97,
    389.97, 389.97, 392.25, 397.69,
];
const PS_VS_ALT: [Real; 15] = [
    17.554, 14.696, 12.228, 10.108, 8.297, 6.759, 5.461, 4.373, 3.468, 2.73, 2.149, 1.692,
    1.049, 0.651, 0.406,
];

const FAR_GRID: [Real; 7] = [0.0, 0.005, 0.010, 0.015, 0.020, 0.025, 0.030];
const R_VS_FAR: [Real; 7] = [0.0686; 7];
const GAMMA_TT_GRID: [Real; 2] = [300.0, 10000.0];
const GAMMA_VS_FAR_TT: [Real; 14] = [1.4; 14];

const INLET_PR_GRID: [Real; 9] = [0.9, 1.0, 1.007, 1.028, 1.065, 1.117, 1.276, 1.525, 1.692];
const INLET_ERAM: [Real; 9] = [0.995, 0.995, 0.996, 0.997, 0.997, 0.998, 0.998, 0.998, 0.998];

// Fan map: 12 R-line rows x 11 corrected-speed columns
const FAN_NC_GRID: [Real; 11] = [0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 0.95, 1.0, 1.05, 1.1];
const FAN_RLINE_GRID: [Real; 12] =
    [1.0, 1.25, 1.5, 1.75, 2.0, 2.25, 2.5, 2.75, 3.0, 3.2, 3.25, 3.5];
#[rustfmt::skip]
const FAN_WC: [Real; 132] = [
     574.9,  839.6, 1104.338, 1369.0782, 1644.4929, 1919.7177, 2191.8401, 2324.3926, 2446.8806, 2564.0947, 2675.1184,
     702.9,  975.1, 1247.2229, 1519.3645, 1791.9211, 2054.9785, 2304.7476, 2422.7034, 2530.636, 2632.072, 2726.3958,
     830.6, 1107.7, 1384.728, 1661.7891, 1929.5121, 2179.5896, 2407.9941, 2512.5652, 2607.3428, 2694.6523, 2774.0383,
     956.5, 1235.6, 1514.7731, 1793.9161, 2054.8865, 2291.583, 2500.2908, 2593.0525, 2676.3726, 2751.4587, 2817.8599,
    1079.2, 1357.3, 1635.3656, 1913.4485, 2165.8337, 2389.1497, 2580.4556, 2663.3154, 2737.145, 2802.1399, 2857.6853,
    1200.2, 1471.1, 1742.0557, 2012.9872, 2252.1497, 2460.2048, 2636.5833, 2712.5415, 2780.9336, 2840.2256, 2889.2947,
    1321.1, 1575.5, 1829.9553, 2084.3818, 2302.7083, 2491.7344, 2655.9902, 2729.2681, 2798.5239, 2858.9136, 2908.2825,
    1349.6, 1608.1, 1866.5565, 2125.0225, 2315.6926, 2493.1619, 2655.9902, 2729.2681, 2798.8225, 2860.8069, 2914.2979,
    1346.7, 1606.6, 1866.5565, 2126.4814, 2315.6926, 2493.1619, 2655.9902, 2729.2681, 2798.8225, 2860.8069, 2914.2979,
    1346.7, 1606.6, 1866.5565, 2126.4814, 2315.6926, 2493.1619, 2655.9902, 2729.2681, 2798.8225, 2860.8069, 2914.2979,
    1346.7, 1606.6, 1866.5565, 2126.4814, 2315.6926, 2493.1619, 2655.9902, 2729.2681, 2798.8225, 2860.8069, 2914.2979,
    1346.7, 1606.6, 1866.5565, 2126.4814, 2315.6926, 2493.1619, 2655.9902, 2729.2681, 2798.8225, 2860.8069, 2914.2979,
];
#[rustfmt::skip]
const FAN_PR: [Real; 132] = [
    1.0000, 1.0349, 1.0760, 1.1171, 1.1703, 1.2381, 1.3234, 1.3734, 1.4288, 1.4898, 1.5553,
    1.0005, 1.0408, 1.0811, 1.1214, 1.1730, 1.2386, 1.3215, 1.3703, 1.4250, 1.4854, 1.5507,
    1.0025, 1.0412, 1.0799, 1.1186, 1.1682, 1.2320, 1.3138, 1.3624, 1.4172, 1.4780, 1.5441,
    1.0002, 1.0363, 1.0724, 1.1085, 1.1559, 1.2185, 1.3004, 1.3497, 1.4055, 1.4677, 1.5356,
    1.0000, 1.0262, 1.0588, 1.0914, 1.1363, 1.1981, 1.2814, 1.3323, 1.3900, 1.4545, 1.5251,
    1.0000, 1.0112, 1.0394, 1.0676, 1.1100, 1.1715, 1.2572, 1.3104, 1.3709, 1.4386, 1.5128,
    1.0000, 1.0000, 1.0146, 1.0379, 1.0776, 1.1390, 1.2282, 1.2845, 1.3484, 1.4201, 1.4988,
    1.0000, 1.0000, 1.0000, 1.0024, 1.0414, 1.1094, 1.2039, 1.2628, 1.3284, 1.4022, 1.4831,
    1.0000, 1.0000, 1.0000, 1.0000, 1.0133, 1.0814, 1.1789, 1.2404, 1.3090, 1.3862, 1.4708,
    1.0000, 1.0000, 1.0000, 1.0000, 1.0003, 1.0582, 1.1584, 1.2221, 1.2931, 1.3731, 1.4608,
    1.0000, 1.0000, 1.0000, 1.0000, 1.0003, 1.0523, 1.1531, 1.2174, 1.2891, 1.3698, 1.4583,
    1.0000, 1.0000, 1.0000, 1.0000, 1.0003, 1.0222, 1.1265, 1.1937, 1.2686, 1.3530, 1.4455,
];
#[rustfmt::skip]
const FAN_EFF: [Real; 132] = [
    0.5465, 0.6025, 0.6585, 0.7145, 0.7692, 0.8178, 0.8588, 0.8749, 0.8857, 0.8926, 0.8945,
    0.7064, 0.7410, 0.7756, 0.8102, 0.8439, 0.8734, 0.8965, 0.9042, 0.9081, 0.9086, 0.9049,
    0.8162, 0.8357, 0.8552, 0.8747, 0.8942, 0.9113, 0.9227, 0.9250, 0.9242, 0.9204, 0.9128,
    0.8523, 0.8672, 0.8821, 0.8970, 0.9128, 0.9273, 0.9356, 0.9359, 0.9334, 0.9278, 0.9182,
    0.7742, 0.8029, 0.8316, 0.8603, 0.8896, 0.9159, 0.9327, 0.9357, 0.9350, 0.9302, 0.9207,
    0.5126, 0.5884, 0.6642, 0.7400, 0.8113, 0.8710, 0.9118, 0.9232, 0.9283, 0.9275, 0.9204,
    0.0005, 0.1140, 0.3039, 0.4938, 0.6571, 0.7838, 0.8700, 0.8968, 0.9127, 0.9195, 0.9172,
    0.0005, 0.0005, 0.0010, 0.0386, 0.4108, 0.6910, 0.8384, 0.8791, 0.9016, 0.9118, 0.9109,
    0.0020, 0.0015, 0.0010, 0.0005, 0.1588, 0.5830, 0.7979, 0.8568, 0.8903, 0.9072, 0.9099,
    0.0020, 0.0015, 0.0010, 0.0005, 0.0046, 0.4661, 0.7568, 0.8345, 0.8791, 0.9026, 0.9088,
    0.0020, 0.0015, 0.0010, 0.0005, 0.0046, 0.4314, 0.7451, 0.8282, 0.8759, 0.9012, 0.9085,
    0.0020, 0.0015, 0.0010, 0.0005, 0.0046, 0.2151, 0.6766, 0.7920, 0.8579, 0.8936, 0.9063,
];
const FAN_SURGE_WC: [Real; 12] = [
    574.9, 839.6, 1104.338, 1369.0782, 1644.4929, 1919.7177, 2191.8401, 2324.3926, 2446.8806,
    2564.0947, 2675.1184, 2914.2979,
];
const FAN_SURGE_PR: [Real; 12] = [
    1.0, 1.0349, 1.076, 1.1171, 1.1703, 1.2381, 1.3234, 1.3734, 1.4288, 1.4898, 1.5553,
    1.69640732438209,
];

// LPC map: 12 R-line rows x 11 corrected-speed columns
const LPC_NC_GRID: [Real; 11] = [0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.25];
const LPC_RLINE_GRID: [Real; 12] =
    [1.0, 1.2, 1.4, 1.6, 1.8, 2.0, 2.2, 2.4, 2.6, 2.8, 3.0, 3.2];
#[rustfmt::skip]
const LPC_WC: [Real; 132] = [
    38.0744,  54.0383,  70.3200,  87.486, 105.8588, 125.1164, 144.4910, 165.9141, 188.5677, 214.1402, 227.8569,
    42.9399,  60.0388,  77.5153,  95.6896, 114.8071, 134.6062, 154.5703, 176.2228, 198.3532, 222.1943, 234.5820,
    47.7510,  65.9233,  84.4949, 103.5393, 123.2285, 143.3572, 163.6243, 185.1849, 206.6834, 228.9021, 240.1193,
    52.5016,  71.6816,  91.2421, 111.0128, 131.0978, 151.3454, 171.6346, 192.7986, 213.5745, 234.2963, 244.5040,
    57.1863,  77.3038,  97.7419, 118.0907, 138.3948, 158.5548, 178.5959, 199.0806, 219.0613, 238.4220, 247.7802,
    61.7994,  82.7808, 103.9805, 124.7566, 145.1045, 164.9773, 184.5149, 204.0644, 223.1942, 241.3359, 250.0000,
    66.3359,  88.1038, 109.9459, 130.9971, 151.2169, 170.6127, 189.4099, 207.7979, 226.0370, 243.1030, 251.2213,
    70.7905,  93.2648, 115.6273, 136.8019, 156.7268, 175.4677, 193.3090, 210.3410, 227.6647, 243.7959, 251.5216,
    75.1584,  98.2565, 121.0156, 142.1633, 161.6340, 179.5554, 196.2491, 211.7638, 228.1611, 243.8124, 251.5216,
    76.5663, 101.0545, 124.6409, 146.2312, 165.7319, 182.8951, 198.2745, 212.1506, 228.1611, 243.8124, 251.5216,
    76.5663, 101.0545, 124.6409, 146.2312, 165.7319, 183.0717, 198.4155, 212.1506, 228.1611, 243.8124, 251.5216,
    76.5663, 101.0545, 124.6409, 146.2312, 165.7319, 183.0717, 198.4155, 212.1506, 228.1611, 243.8124, 251.5216,
];
#[rustfmt::skip]
const LPC_PR: [Real; 132] = [
    1.0423, 1.0760, 1.1215, 1.1789, 1.2494, 1.3353, 1.4411, 1.5724, 1.7323, 1.9360, 2.0507,
    1.0412, 1.0738, 1.1180, 1.1738, 1.2422, 1.3253, 1.4282, 1.5561, 1.7101, 1.9056, 2.0158,
    1.0393, 1.0704, 1.1127, 1.1660, 1.2312, 1.3105, 1.4088, 1.5313, 1.6785, 1.8662, 1.9729,
    1.0367, 1.0658, 1.1055, 1.1555, 1.2167, 1.2910, 1.3830, 1.4982, 1.6379, 1.8184, 1.9223,
    1.0333, 1.0600, 1.0965, 1.1423, 1.1986, 1.2669, 1.3512, 1.4572, 1.5888, 1.7625, 1.8645,
    1.0292, 1.0530, 1.0856, 1.1266, 1.1771, 1.2384, 1.3136, 1.4088, 1.5318, 1.6991, 1.8000,
    1.0234, 1.0434, 1.0707, 1.1052, 1.1481, 1.2002, 1.2632, 1.3440, 1.4572, 1.6190, 1.7201,
    1.0151, 1.0297, 1.0497, 1.0753, 1.1078, 1.1476, 1.1942, 1.2556, 1.3572, 1.5142, 1.6176,
    1.0043, 1.0122, 1.0228, 1.0374, 1.0572, 1.0822, 1.1088, 1.1472, 1.2358, 1.3887, 1.4958,
    1.0000, 1.0000, 1.0000, 1.0000, 1.0000, 1.0056, 1.0101, 1.0233, 1.0982, 1.2471, 1.3584,
    1.0000, 1.0000, 1.0000, 1.0000, 1.0000, 1.0000, 1.0000, 1.0000, 1.0000, 1.0944, 1.2098,
    1.0000, 1.0000, 1.0000, 1.0000, 1.0000, 1.0000, 1.0000, 1.0000, 1.0000, 1.0000, 1.0546,
];
#[rustfmt::skip]
const LPC_EFF: [Real; 132] = [
    0.7256, 0.7474, 0.7610, 0.7744, 0.7872, 0.7965, 0.7997, 0.8034, 0.8214, 0.8425, 0.8540,
    0.7656, 0.7848, 0.7984, 0.8117, 0.8240, 0.8329, 0.8368, 0.8405, 0.8533, 0.8663, 0.8731,
    0.7978, 0.8147, 0.8286, 0.8421, 0.8542, 0.8627, 0.8673, 0.8712, 0.8793, 0.8853, 0.8880,
    0.8195, 0.8351, 0.8496, 0.8637, 0.8759, 0.8843, 0.8896, 0.8937, 0.8981, 0.8985, 0.8981,
    0.8274, 0.8430, 0.8586, 0.8738, 0.8866, 0.8953, 0.9013, 0.9058, 0.9079, 0.9047, 0.9024,
    0.8164, 0.8339, 0.8516, 0.8685, 0.8827, 0.8924, 0.8991, 0.9042, 0.9062, 0.9025, 0.9000,
    0.7494, 0.7757, 0.7977, 0.8183, 0.8360, 0.8485, 0.8561, 0.8628, 0.8724, 0.8778, 0.8800,
    0.5651, 0.6161, 0.6479, 0.6765, 0.7028, 0.7222, 0.7310, 0.7420, 0.7766, 0.8117, 0.8286,
    0.1931, 0.3003, 0.3526, 0.3970, 0.4407, 0.4748, 0.4858, 0.5068, 0.5961, 0.6929, 0.7386,
    0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0391, 0.0551, 0.0979, 0.2955, 0.5052, 0.6003,
    0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.2255, 0.4004,
    0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.1206,
];
const LPC_SURGE_WC: [Real; 12] = [
    38.0744, 54.0383, 70.32, 87.486, 105.8588, 125.1164, 144.491, 165.9141, 188.5677, 214.1402,
    227.8569, 251.5216,
];
const LPC_SURGE_PR: [Real; 12] = [
    1.0423, 1.076, 1.1215, 1.1789, 1.2494, 1.3353, 1.4411, 1.5724, 1.7323, 1.936, 2.0507,
    2.2485858683211,
];

// HPC map: 11 R-line rows x 13 corrected-speed columns
const HPC_NC_GRID: [Real; 13] = [
    0.5, 0.6, 0.7, 0.75, 0.8, 0.85, 0.9, 0.925, 0.95, 0.975, 1.0, 1.025, 1.05,
];
const HPC_RLINE_GRID: [Real; 11] = [1.0, 1.2, 1.4, 1.6, 1.8, 2.0, 2.2, 2.4, 2.6, 2.8, 3.0];
#[rustfmt::skip]
const HPC_WC: [Real; 143] = [
    22.7411, 31.7548, 46.1066, 56.7268, 70.1448, 89.3764, 118.0620, 138.5093, 160.6243, 181.7993, 202.6315, 209.9986, 216.6847,
    24.0487, 33.1181, 47.4088, 58.0480, 71.5163, 90.9746, 120.1207, 140.8966, 162.5676, 183.4993, 203.5858, 210.5917, 217.0279,
    25.1548, 34.2670, 48.5066, 59.1608, 72.6688, 92.3098, 121.8253, 142.8639, 164.1805, 184.9150, 204.3958, 211.1029, 217.3287,
    26.0615, 35.2054, 49.4046, 60.0704, 73.6088, 93.3900, 123.1867, 144.4238, 165.4722, 186.0545, 205.0661, 211.5321, 217.5860,
    26.7738, 35.9397, 50.1096, 60.7837, 74.3429, 94.2232, 124.2166, 145.5916, 166.4536, 186.9260, 205.5998, 211.8825, 217.8015,
    27.2992, 36.4783, 50.6291, 61.3084, 74.8795, 94.8199, 124.9292, 146.3836, 167.1370, 187.5389, 206.0000, 212.1554, 217.9767,
    27.6470, 36.8308, 50.9717, 61.6527, 75.2269, 95.1897, 125.3385, 146.8174, 167.5334, 187.9029, 206.2702, 212.3516, 218.1106,
    27.8286, 37.0085, 51.1469, 61.8260, 75.3943, 95.3442, 125.4609, 146.9192, 167.6563, 188.0273, 206.4145, 212.4735, 218.2041,
    27.8634, 37.0362, 51.1757, 61.8517, 75.4134, 95.3504, 125.4609, 146.9192, 167.6563, 188.0271, 206.4418, 212.5220, 218.2586,
    27.8634, 37.0362, 51.1757, 61.8517, 75.4134, 95.3504, 125.4609, 146.9192, 167.6563, 188.0271, 206.4418, 212.5227, 218.2739,
    27.8634, 37.0362, 51.1757, 61.8517, 75.4134, 95.3504, 125.4609, 146.9192, 167.6563, 188.0271, 206.4418, 212.5227, 218.2739,
];
#[rustfmt::skip]
const HPC_PR: [Real; 143] = [
    2.4769, 3.4633, 5.0821, 6.3490, 8.0021, 10.4899, 14.4564, 17.4426, 20.7403, 23.8298, 26.6962, 27.6439, 28.4663,
    2.4288, 3.3778, 4.9375, 6.1658, 7.7686, 10.1976, 14.0970, 17.0500, 20.2486, 23.2601, 26.0933, 27.0687, 27.9667,
    2.3620, 3.2643, 4.7554, 5.9371, 7.4792,  9.8249, 13.6074, 16.4870, 19.6093, 22.5536, 25.4175, 26.4522, 27.4460,
    2.2778, 3.1248, 4.5391, 5.6667, 7.1388,  9.3786, 12.9977, 15.7661, 18.8329, 21.7200, 24.6733, 25.7969, 26.9054,
    2.1774, 2.9619, 4.2923, 5.3594, 6.7532,  8.8669, 12.2808, 14.9034, 17.9324, 20.7705, 23.8656, 25.1052, 26.3460,
    2.0627, 2.7787, 4.0194, 5.0204, 6.3287,  8.2989, 11.4715, 13.9183, 16.9227, 19.7178, 22.9999, 24.3798, 25.7690,
    1.9284, 2.5679, 3.7106, 4.6377, 5.8504,  7.6539, 10.5377, 12.7692, 15.7626, 18.5212, 22.0495, 23.6033, 25.1640,
    1.7711, 2.3253, 3.3602, 4.2042, 5.3097,  6.9201,  9.4621, 11.4347, 14.4263, 17.1524, 20.9930, 22.7614, 24.5225,
    1.5958, 2.0595, 2.9800, 3.7342, 4.7237,  6.1229,  8.2878,  9.9718, 12.9562, 15.6466, 19.8436, 21.8600, 23.8472,
    1.4083, 1.7802, 2.5826, 3.2431, 4.1114,  5.2899,  7.0614,  8.4425, 11.3983, 14.0424, 18.6163, 20.9058, 23.1399,
    1.2146, 1.4973, 2.1813, 2.7467, 3.4919,  4.4495,  5.8306,  6.9104,  9.8011, 12.3810, 17.3267, 19.9057, 22.4038,
];
#[rustfmt::skip]
const HPC_EFF: [Real; 143] = [
    0.6753, 0.6953, 0.7248, 0.7427, 0.7634, 0.7891, 0.8139, 0.8206, 0.8403, 0.8408, 0.8470, 0.8350, 0.8202,
    0.6913, 0.7094, 0.7359, 0.7533, 0.7736, 0.8008, 0.8280, 0.8356, 0.8512, 0.8492, 0.8505, 0.8364, 0.8203,
    0.7016, 0.7184, 0.7429, 0.7600, 0.7804, 0.8090, 0.8385, 0.8469, 0.8593, 0.8552, 0.8529, 0.8371, 0.8201,
    0.7050, 0.7214, 0.7452, 0.7627, 0.7834, 0.8134, 0.8449, 0.8541, 0.8643, 0.8588, 0.8539, 0.8370, 0.8195,
    0.7004, 0.7176, 0.7424, 0.7606, 0.7822, 0.8136, 0.8469, 0.8567, 0.8660, 0.8597, 0.8536, 0.8362, 0.8185,
    0.6864, 0.7058, 0.7335, 0.7533, 0.7762, 0.8092, 0.8439, 0.8544, 0.8641, 0.8578, 0.8520, 0.8346, 0.8171,
    0.6570, 0.6812, 0.7154, 0.7379, 0.7630, 0.7974, 0.8333, 0.8442, 0.8566, 0.8516, 0.8483, 0.8318, 0.8152,
    0.6044, 0.6378, 0.6838, 0.7108, 0.7394, 0.7754, 0.8117, 0.8229, 0.8415, 0.8394, 0.8418, 0.8275, 0.8124,
    0.5236, 0.5717, 0.6366, 0.6703, 0.7041, 0.7417, 0.7779, 0.7892, 0.8179, 0.8209, 0.8324, 0.8217, 0.8088,
    0.4075, 0.4783, 0.5713, 0.6147, 0.6556, 0.6950, 0.7303, 0.7416, 0.7852, 0.7954, 0.8200, 0.8141, 0.8045,
    0.2467, 0.3512, 0.4848, 0.5414, 0.5920, 0.6335, 0.6671, 0.6783, 0.7423, 0.7624, 0.8043, 0.8049, 0.7992,
];
const HPC_SURGE_WC: [Real; 14] = [
    22.7411, 31.7548, 46.1066, 56.7268, 70.1448, 89.3764, 118.062, 138.5093, 160.6243, 181.7993,
    202.6315, 209.9986, 216.6847, 218.2739,
];
const HPC_SURGE_PR: [Real; 14] = [
    2.4769, 3.4633, 5.0821, 6.349, 8.0021, 10.4899, 14.4564, 17.4426, 20.7403, 23.8298, 26.6962,
    27.6439, 28.4663, 28.6617739055653,
];

// HPT map: 20 pressure-ratio rows x 8 corrected-speed columns
const HPT_NC_GRID: [Real; 8] = [60.0, 70.0, 80.0, 90.0, 100.0, 110.0, 120.0, 130.0];
const HPT_PR_GRID: [Real; 20] = [
    3.0, 3.25, 3.5, 3.75, 4.0, 4.25, 4.5, 4.75, 5.0, 5.25, 5.5, 5.75, 6.0, 6.25, 6.5, 6.75,
    7.0, 7.25, 7.5, 8.0,
];
#[rustfmt::skip]
const HPT_WC: [Real; 160] = [
    30.446, 30.299, 30.120, 30.014, 29.856, 29.799, 29.742, 29.685,
    30.533, 30.413, 30.239, 30.124, 29.948, 29.870, 29.792, 29.714,
    30.568, 30.480, 30.317, 30.201, 30.013, 29.920, 29.827, 29.734,
    30.572, 30.516, 30.368, 30.253, 30.059, 29.955, 29.851, 29.747,
    30.572, 30.529, 30.398, 30.288, 30.091, 29.979, 29.867, 29.755,
    30.572, 30.530, 30.415, 30.311, 30.113, 29.997, 29.881, 29.765,
    30.572, 30.530, 30.421, 30.325, 30.128, 30.009, 29.890, 29.771,
    30.572, 30.530, 30.421, 30.333, 30.139, 30.017, 29.895, 29.773,
    30.572, 30.530, 30.421, 30.337, 30.145, 30.023, 29.901, 29.779,
    30.572, 30.530, 30.421, 30.337, 30.149, 30.026, 29.903, 29.780,
    30.572, 30.530, 30.421, 30.337, 30.150, 30.028, 29.906, 29.784,
    30.572, 30.530, 30.421, 30.337, 30.150, 30.029, 29.908, 29.787,
    30.572, 30.530, 30.421, 30.337, 30.150, 30.029, 29.908, 29.787,
    30.572, 30.530, 30.421, 30.337, 30.150, 30.029, 29.908, 29.787,
    30.572, 30.530, 30.421, 30.337, 30.150, 30.029, 29.908, 29.787,
    30.572, 30.530, 30.421, 30.337, 30.150, 30.029, 29.908, 29.787,
    30.572, 30.530, 30.421, 30.337, 30.150, 30.029, 29.908, 29.787,
    30.572, 30.530, 30.421, 30.337, 30.150, 30.029, 29.908, 29.787,
    30.572, 30.530, 30.421, 30.337, 30.150, 30.029, 29.908, 29.787,
    30.572, 30.530, 30.421, 30.337, 30.150, 30.029, 29.908, 29.787,
];
#[rustfmt::skip]
const HPT_EFF: [Real; 160] = [
    0.8460, 0.8879, 0.9125, 0.9228, 0.9215, 0.9106, 0.8997, 0.8888,
    0.8405, 0.8842, 0.9111, 0.9242, 0.9258, 0.9176, 0.9094, 0.9012,
    0.8349, 0.8804, 0.9096, 0.9250, 0.9289, 0.9232, 0.9175, 0.9118,
    0.8296, 0.8769, 0.9078, 0.9247, 0.9304, 0.9267, 0.9230, 0.9193,
    0.8249, 0.8735, 0.9055, 0.9240, 0.9313, 0.9292, 0.9271, 0.9250,
    0.8206, 0.8701, 0.9034, 0.9232, 0.9319, 0.9312, 0.9305, 0.9298,
    0.8165, 0.8670, 0.9014, 0.9224, 0.9323, 0.9327, 0.9331, 0.9335,
    0.8127, 0.8640, 0.8995, 0.9217, 0.9326, 0.9340, 0.9354, 0.9368,
    0.8092, 0.8614, 0.8979, 0.9210, 0.9328, 0.9351, 0.9374, 0.9397,
    0.8060, 0.8590, 0.8964, 0.9203, 0.9329, 0.9361, 0.9393, 0.9425,
    0.8030, 0.8568, 0.8950, 0.9197, 0.9330, 0.9369, 0.9408, 0.9447,
    0.8002, 0.8548, 0.8936, 0.9188, 0.9311, 0.9349, 0.9387, 0.9425,
    0.7976, 0.8529, 0.8924, 0.9162, 0.9288, 0.9329, 0.9370, 0.9411,
    0.7953, 0.8511, 0.8903, 0.9137, 0.9266, 0.9311, 0.9356, 0.9401,
    0.7931, 0.8495, 0.8877, 0.9113, 0.9245, 0.9293, 0.9341, 0.9389,
    0.7911, 0.8479, 0.8853, 0.9091, 0.9225, 0.9276, 0.9327, 0.9378,
    0.7892, 0.8460, 0.8830, 0.9070, 0.9206, 0.9259, 0.9312, 0.9365,
    0.7875, 0.8436, 0.8808, 0.9050, 0.9188, 0.9239, 0.9290, 0.9341,
    0.7858, 0.8414, 0.8787, 0.9031, 0.9161, 0.9212, 0.9263, 0.9314,
    0.7826, 0.8373, 0.8749, 0.8980, 0.9107, 0.9161, 0.9215, 0.9269,
];

// LPT map: 28 pressure-ratio rows x 11 corrected-speed columns
const LPT_NC_GRID: [Real; 11] = [
    20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0, 120.0,
];
const LPT_PR_GRID: [Real; 28] = [
    1.0, 1.25, 1.5, 1.75, 2.0, 2.25, 2.5, 2.75, 3.0, 3.25, 3.5, 3.75, 4.0, 4.25, 4.5, 4.75,
    5.0, 5.25, 5.5, 5.75, 6.0, 6.25, 6.5, 6.75, 7.0, 7.25, 7.5, 8.0,
];
#[rustfmt::skip]
const LPT_WC: [Real; 308] = [
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 151.335, 148.427, 145.903, 142.728, 138.719,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 151.518, 148.748, 146.259, 143.056, 138.987,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 151.701, 149.069, 146.615, 143.384, 139.255,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 151.884, 149.390, 146.971, 143.712, 139.523,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 152.067, 149.711, 147.327, 144.040, 139.791,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 152.25, 150.032, 147.683, 144.368, 140.059,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 152.433, 150.353, 148.039, 144.696, 140.327,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 152.616, 150.674, 148.395, 145.024, 140.595,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 152.799, 150.995, 148.751, 145.352, 140.863,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 152.982, 151.316, 149.107, 145.680, 141.131,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.052, 151.518, 149.349, 145.905, 141.310,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.061, 151.647, 149.517, 146.061, 141.428,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.061, 151.729, 149.635, 146.169, 141.503,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.061, 151.781, 149.719, 146.244, 141.547,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.061, 151.814, 149.779, 146.293, 141.567,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.061, 151.834, 149.822, 146.324, 141.569,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.061, 151.846, 149.852, 146.339, 141.569,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.061, 151.852, 149.872, 146.344, 141.569,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.061, 151.856, 149.885, 146.344, 141.569,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.061, 151.858, 149.894, 146.344, 141.569,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.061, 151.859, 149.898, 146.344, 141.569,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.061, 151.859, 149.899, 146.344, 141.569,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.061, 151.859, 149.899, 146.344, 141.569,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.061, 151.859, 149.899, 146.344, 141.569,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.061, 151.859, 149.899, 146.344, 141.569,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.061, 151.859, 149.899, 146.344, 141.569,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.061, 151.859, 149.899, 146.344, 141.569,
    155.016, 154.715, 154.414, 154.113, 153.812, 153.511, 153.061, 151.859, 149.899, 146.344, 141.569,
];
#[rustfmt::skip]
const LPT_EFF: [Real; 308] = [
    0.7508, 0.7886, 0.8264, 0.8642, 0.9020, 0.9398, 0.9593, 0.9549, 0.9383, 0.9103, 0.8727,
    0.7373, 0.7765, 0.8157, 0.8549, 0.8941, 0.9333, 0.9544, 0.9528, 0.9391, 0.9142, 0.8798,
    0.7238, 0.7644, 0.8050, 0.8456, 0.8862, 0.9268, 0.9495, 0.9507, 0.9399, 0.9181, 0.8869,
    0.7103, 0.7523, 0.7943, 0.8363, 0.8783, 0.9203, 0.9446, 0.9486, 0.9407, 0.9220, 0.8940,
    0.6968, 0.7402, 0.7836, 0.8270, 0.8704, 0.9138, 0.9397, 0.9465, 0.9415, 0.9259, 0.9011,
    0.6833, 0.7281, 0.7729, 0.8177, 0.8625, 0.9073, 0.9348, 0.9444, 0.9423, 0.9298, 0.9082,
    0.6698, 0.7160, 0.7622, 0.8084, 0.8546, 0.9008, 0.9299, 0.9423, 0.9431, 0.9337, 0.9153,
    0.6563, 0.7039, 0.7515, 0.7991, 0.8467, 0.8943, 0.9250, 0.9402, 0.9439, 0.9376, 0.9224,
    0.6428, 0.6918, 0.7408, 0.7898, 0.8388, 0.8878, 0.9201, 0.9381, 0.9447, 0.9415, 0.9295,
    0.6293, 0.6797, 0.7301, 0.7805, 0.8309, 0.8813, 0.9152, 0.9360, 0.9455, 0.9454, 0.9366,
    0.6190, 0.6701, 0.7212, 0.7723, 0.8234, 0.8745, 0.9105, 0.9336, 0.9456, 0.9479, 0.9419,
    0.6055, 0.6581, 0.7107, 0.7633, 0.8159, 0.8685, 0.9061, 0.9310, 0.9450, 0.9495, 0.9458,
    0.5939, 0.6477, 0.7015, 0.7553, 0.8091, 0.8629, 0.9018, 0.9283, 0.9440, 0.9504, 0.9487,
    0.5842, 0.6389, 0.6936, 0.7483, 0.8030, 0.8577, 0.8978, 0.9257, 0.9429, 0.9510, 0.9509,
    0.5763, 0.6316, 0.6869, 0.7422, 0.7975, 0.8528, 0.8940, 0.9231, 0.9417, 0.9512, 0.9526,
    0.5684, 0.6244, 0.6804, 0.7364, 0.7924, 0.8484, 0.8905, 0.9206, 0.9404, 0.9511, 0.9538,
    0.5608, 0.6175, 0.6742, 0.7309, 0.7876, 0.8443, 0.8872, 0.9182, 0.9383, 0.9492, 0.9528,
    0.5544, 0.6116, 0.6688, 0.7260, 0.7832, 0.8404, 0.8840, 0.9153, 0.9355, 0.9472, 0.9517,
    0.5483, 0.6060, 0.6637, 0.7214, 0.7791, 0.8368, 0.8810, 0.9119, 0.9327, 0.9452, 0.9505,
    0.5429, 0.6010, 0.6591, 0.7172, 0.7753, 0.8334, 0.8776, 0.9087, 0.9301, 0.9433, 0.9493,
    0.5377, 0.5962, 0.6547, 0.7132, 0.7717, 0.8302, 0.8741, 0.9056, 0.9276, 0.9414, 0.9481,
    0.5332, 0.5920, 0.6508, 0.7096, 0.7684, 0.8272, 0.8707, 0.9027, 0.9252, 0.9396, 0.9468,
    0.5292, 0.5882, 0.6472, 0.7062, 0.7652, 0.8242, 0.8676, 0.8999, 0.9229, 0.9378, 0.9456,
    0.5275, 0.5862, 0.6449, 0.7036, 0.7623, 0.8210, 0.8646, 0.8973, 0.9207, 0.9361, 0.9444,
    0.5259, 0.5843, 0.6427, 0.7011, 0.7595, 0.8179, 0.8618, 0.8948, 0.9186, 0.9344, 0.9432,
    0.5240, 0.5822, 0.6404, 0.6986, 0.7568, 0.8150, 0.8590, 0.8924, 0.9165, 0.9326, 0.9413,
    0.5222, 0.5802, 0.6382, 0.6962, 0.7542, 0.8122, 0.8565, 0.8901, 0.9146, 0.9304, 0.9395,
    0.5191, 0.5767, 0.6343, 0.6919, 0.7495, 0.8071, 0.8516, 0.8858, 0.9099, 0.9262, 0.9360,
];

fn flat_coeff(value: Real) -> CoreResult<Table1> {
    Table1::new(vec![0.0, 10000.0], vec![value, value])
}

fn gas_tables() -> CycleResult<GasTables> {
    let r = Table1::new(FAR_GRID.to_vec(), R_VS_FAR.to_vec())?;
    let gamma = Table2::new(
        FAR_GRID.to_vec(),
        GAMMA_TT_GRID.to_vec(),
        GAMMA_VS_FAR_TT.to_vec(),
    )?;
    Ok(GasTables::new(r, gamma)?)
}

/// Build the geared-turbofan engine deck.
pub fn engine() -> CycleResult<Engine> {
    let gas = gas_tables()?;

    let ambient = Ambient {
        name: "gtf_ambient".into(),
        far: 0.0,
        ts_vs_alt: Table1::new(ALT_GRID.to_vec(), TS_VS_ALT.to_vec())?,
        ps_vs_alt: Table1::new(ALT_GRID.to_vec(), PS_VS_ALT.to_vec())?,
    };

    let inlet = Inlet {
        name: "gtf_inlet".into(),
        e_ram_base: 1.0,
        e_ram_vs_pr: Table1::new(INLET_PR_GRID.to_vec(), INLET_ERAM.to_vec())?,
    };

    let fan = Compressor {
        name: "gtf_fan".into(),
        wc_map: Table2::new(FAN_RLINE_GRID.to_vec(), FAN_NC_GRID.to_vec(), FAN_WC.to_vec())?,
        pr_map: Table2::new(FAN_RLINE_GRID.to_vec(), FAN_NC_GRID.to_vec(), FAN_PR.to_vec())?,
        eff_map: Table2::new(FAN_RLINE_GRID.to_vec(), FAN_NC_GRID.to_vec(), FAN_EFF.to_vec())?,
        surge_pr: Table1::new(FAN_SURGE_WC.to_vec(), FAN_SURGE_PR.to_vec())?,
        s_nc: 2359.983186,
        s_wc: 0.768426,
        s_pr: 0.769231,
        s_eff: 1.036257,
        bleeds: vec![],
        cust_frac_ht: 0.5,
        cust_frac_pt: 0.5,
    };

    let lpc = Compressor {
        name: "gtf_lpc".into(),
        wc_map: Table2::new(LPC_RLINE_GRID.to_vec(), LPC_NC_GRID.to_vec(), LPC_WC.to_vec())?,
        pr_map: Table2::new(LPC_RLINE_GRID.to_vec(), LPC_NC_GRID.to_vec(), LPC_PR.to_vec())?,
        eff_map: Table2::new(LPC_RLINE_GRID.to_vec(), LPC_NC_GRID.to_vec(), LPC_EFF.to_vec())?,
        surge_pr: Table1::new(LPC_SURGE_WC.to_vec(), LPC_SURGE_PR.to_vec())?,
        s_nc: 6398.399938,
        s_wc: 0.300704,
        s_pr: 4.374453,
        s_eff: 1.019486,
        bleeds: vec![],
        cust_frac_ht: 0.5,
        cust_frac_pt: 0.5,
    };

    let hpc = Compressor {
        name: "gtf_hpc".into(),
        wc_map: Table2::new(HPC_RLINE_GRID.to_vec(), HPC_NC_GRID.to_vec(), HPC_WC.to_vec())?,
        pr_map: Table2::new(HPC_RLINE_GRID.to_vec(), HPC_NC_GRID.to_vec(), HPC_PR.to_vec())?,
        eff_map: Table2::new(HPC_RLINE_GRID.to_vec(), HPC_NC_GRID.to_vec(), HPC_EFF.to_vec())?,
        surge_pr: Table1::new(HPC_SURGE_WC.to_vec(), HPC_SURGE_PR.to_vec())?,
        s_nc: 18242.834381,
        s_wc: 0.1328,
        s_pr: 0.595594,
        s_eff: 0.994014,
        // Port 1 feeds LPT cooling, ports 2 and 3 feed HPT cooling
        bleeds: vec![
            BleedSpec { frac_w: 0.02, frac_ht: 0.4997, frac_pt: 0.146498 },
            BleedSpec { frac_w: 0.0693, frac_ht: 1.0, frac_pt: 1.0 },
            BleedSpec { frac_w: 0.0625, frac_ht: 1.0, frac_pt: 1.0 },
        ],
        cust_frac_ht: 0.5,
        cust_frac_pt: 0.5,
    };

    let hpt = Turbine {
        name: "gtf_hpt".into(),
        wc_map: Table2::new(HPT_PR_GRID.to_vec(), HPT_NC_GRID.to_vec(), HPT_WC.to_vec())?,
        eff_map: Table2::new(HPT_PR_GRID.to_vec(), HPT_NC_GRID.to_vec(), HPT_EFF.to_vec())?,
        s_nc: 3.708724,
        s_wc: 0.1951,
        s_pr: 0.773898,
        s_eff: 0.998392,
        cooling: vec![
            CoolingPort { rotor_frac: 1.0 },
            CoolingPort { rotor_frac: 0.0 },
        ],
    };

    let lpt = Turbine {
        name: "gtf_lpt".into(),
        wc_map: Table2::new(LPT_PR_GRID.to_vec(), LPT_NC_GRID.to_vec(), LPT_WC.to_vec())?,
        eff_map: Table2::new(LPT_PR_GRID.to_vec(), LPT_NC_GRID.to_vec(), LPT_EFF.to_vec())?,
        s_nc: 1.430948,
        s_wc: 0.1573,
        s_pr: 1.540753,
        s_eff: 1.028756,
        cooling: vec![CoolingPort { rotor_frac: 1.0 }],
    };

    let vbv = BleedValve {
        name: "gtf_vbv".into(),
        area: 4.0,
        frac_vs_pos: Table1::new(vec![0.0, 1.0], vec![0.0, 1.0])?,
        wc_per_area_vs_pr: Table1::new(vec![1.0, 1.1, 2.0, 5.0], vec![0.0, 3.0, 5.0, 9.9])?,
    };

    let bypass_nozzle = Nozzle {
        name: "gtf_noz_byp".into(),
        geometry: NozzleGeometry::Convergent,
        cd_vs_pr: flat_coeff(1.0)?,
        cv_vs_pr: flat_coeff(1.0)?,
        cfg_vs_pr: Some(flat_coeff(0.9975)?),
        tg_vs_tt: Table1::new(vec![300.0, 10000.0], vec![1.0, 1.0])?,
    };

    let core_nozzle = Nozzle {
        name: "gtf_noz_cor".into(),
        geometry: NozzleGeometry::Convergent,
        cd_vs_pr: flat_coeff(1.0)?,
        cv_vs_pr: flat_coeff(1.0)?,
        cfg_vs_pr: Some(flat_coeff(0.9999)?),
        tg_vs_tt: Table1::new(vec![300.0, 10000.0], vec![1.0, 1.0])?,
    };

    Ok(Engine {
        gas,
        ambient,
        inlet,
        fan,
        lpc,
        hpc,
        duct2: Duct {
            name: "gtf_duct2".into(),
            dp_loss: 0.01,
            mn_des: 0.45,
            area: 286.9,
            mn_guess: 0.45,
        },
        duct25: Duct {
            name: "gtf_duct25".into(),
            dp_loss: 0.015,
            mn_des: 0.45,
            area: 115.6,
            mn_guess: 0.45,
        },
        duct17: Duct {
            name: "gtf_duct17".into(),
            dp_loss: 0.015,
            mn_des: 0.45,
            area: 6917.7,
            mn_guess: 0.45,
        },
        duct45: Duct {
            name: "gtf_duct45".into(),
            dp_loss: 0.005,
            mn_des: 0.3,
            area: 66.3,
            mn_guess: 0.3,
        },
        duct5: Duct {
            name: "gtf_duct5".into(),
            dp_loss: 0.01,
            mn_des: 0.35,
            area: 945.0,
            mn_guess: 0.35,
        },
        vbv,
        hpc_exit_static: StaticCalc {
            name: "gtf_hpc_static".into(),
            mode: SolveMode::KnownArea,
            area: 17.2,
            mach: 0.3,
        },
        burner: Burner {
            name: "gtf_burner".into(),
            lhv: 18400.0,
            dp_qp: 0.04,
            eff: 0.999,
            h_fuel: -1200.0,
        },
        hpt,
        lpt,
        bypass_nozzle,
        core_nozzle,
        core_nozzle_throat_area: 393.43,
        core_nozzle_exit_area: 110.7,
        gear_ratio: 3.1,
        lp_shaft: Shaft::new("gtf_lp_shaft", 17.44087229)?,
        lp_shaft_eff: 0.99,
        hp_shaft: Shaft::new("gtf_hp_shaft", 1.86055038)?,
    })
}
